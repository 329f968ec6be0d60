pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest (1) to strongest (10).
///
/// An ace-high straight flush gets its own category so a royal reads as a
/// royal everywhere it surfaces: logs, winner messages, comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Numeric strength of the category, 1 through 10.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name, as shown in winner messages.
    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranked tie-breakers for an evaluation, strongest first.
///
/// Length varies by category: a royal flush carries none, a flush carries
/// all five ranks. Comparison happens through [`HandValue`], where absent
/// slots pack as zero and so rank below every real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieBreakers {
    ranks: [Rank; 5],
    len: u8,
}

impl TieBreakers {
    pub(crate) fn new(ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5);
        let mut buf = [Rank::Two; 5];
        buf[..ranks.len()].copy_from_slice(ranks);
        Self { ranks: buf, len: ranks.len() as u8 }
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    tiebreakers: TieBreakers,
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Tie-breaker ranks in decision order, strongest first.
    pub fn tiebreakers(&self) -> &[Rank] {
        self.tiebreakers.as_slice()
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, ranks_desc: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        // r0 is the primary tiebreaker and must be more significant than r1..r4.
        // Slots past ranks_desc.len() stay zero, so shorter tiebreak lists
        // compare correctly against longer ones within a category.
        const CAT_SHIFT: u32 = 48; // put category in the high byte
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("cannot evaluate {0} cards: need five to seven")]
    CardCount(usize),
    #[error("duplicate card in evaluation input: {0}")]
    DuplicateCard(Card),
    #[error("board shows {0} cards; a showdown needs all five")]
    BoardIncomplete(usize),
}

/// Evaluate a Hold'em hand given hole cards and a complete board.
/// Validates inputs, builds the 7-card set (2 hole + 5 board),
/// and returns the best five-card evaluation with category and tiebreaks.
///
/// ```
/// use headsup_holdem::evaluator::{evaluate_holdem, Category};
/// use headsup_holdem::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    let board_cards = board.as_slice();
    if board_cards.len() < 5 {
        return Err(EvalError::BoardIncomplete(board_cards.len()));
    }
    let seven = [
        hole.first(),
        hole.second(),
        board_cards[0],
        board_cards[1],
        board_cards[2],
        board_cards[3],
        board_cards[4],
    ];
    Ok(best_five_of(&seven))
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted cards, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Evaluate five to seven cards, returning the best five-card hand among them.
///
/// Rejects card counts outside 5..=7 and duplicated cards.
///
/// ```
/// use headsup_holdem::cards::parse_cards;
/// use headsup_holdem::evaluator::{evaluate_cards, Category};
///
/// let cards = parse_cards("As Ks Qs Js 10s 2h 3d").unwrap();
/// let eval = evaluate_cards(&cards).unwrap();
/// assert_eq!(eval.category, Category::RoyalFlush);
/// ```
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }
    Ok(best_five_of(cards))
}

/// Best five-card evaluation over a pool of 5..=7 distinct cards.
fn best_five_of(cards: &[Card]) -> Evaluation {
    use combinations::ChooseFive;

    let mut best: Option<Evaluation> = None;

    for indices in ChooseFive::new(cards.len()) {
        let hand = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let eval = evaluate_five(&hand);

        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.unwrap_or_else(|| evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Compare two Hold'em hands on a shared board. Returns the ordering or a validation error.
///
/// ```
/// use headsup_holdem::evaluator::compare_holdem;
/// use headsup_holdem::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let cards = parse_cards(s).expect("valid cards");
        cards.try_into().expect("exactly five cards")
    }

    #[test]
    fn board_incomplete_errors() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board: Board = "2c 3c 4c".parse().unwrap();
        let err = evaluate_holdem(&hole, &board).unwrap_err();
        assert!(matches!(err, EvalError::BoardIncomplete(3)));
    }

    #[test]
    fn compare_errors_with_short_board() {
        let a: HoleCards = "As Ks".parse().unwrap();
        let b: HoleCards = "2c 3c".parse().unwrap();
        let board: Board = "2h".parse().unwrap();
        let err = compare_holdem(&a, &b, &board).unwrap_err();
        assert!(matches!(err, EvalError::BoardIncomplete(1)));
    }

    #[test]
    fn card_count_outside_range_rejected() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert!(matches!(evaluate_cards(&four), Err(EvalError::CardCount(4))));

        let eight = parse_cards("As Ks Qs Js 9s 8s 7s 6s").unwrap();
        assert!(matches!(evaluate_cards(&eight), Err(EvalError::CardCount(8))));
    }

    #[test]
    fn duplicate_cards_rejected() {
        let cards = parse_cards("As Ks Qs Js 9h As 2d").unwrap();
        let err = evaluate_cards(&cards).unwrap_err();
        assert!(matches!(err, EvalError::DuplicateCard(c) if c.to_string() == "As"));
    }

    #[test]
    fn evaluate_five_categories() {
        let e = evaluate_five(&five("As Ks Qs Js 10s"));
        assert_eq!(e.category, Category::RoyalFlush);

        let e = evaluate_five(&five("9s 8s 7s 6s 5s"));
        assert_eq!(e.category, Category::StraightFlush);

        let e = evaluate_five(&five("Kc Kd Kh Ks 2s"));
        assert_eq!(e.category, Category::FourOfAKind);

        let e = evaluate_five(&five("10c 10d 10h 2s 2h"));
        assert_eq!(e.category, Category::FullHouse);

        let e = evaluate_five(&five("Ah 9h 7h 3h 2h"));
        assert_eq!(e.category, Category::Flush);

        let e = evaluate_five(&five("Ac 2d 3h 4s 5c"));
        assert_eq!(e.category, Category::Straight);

        let e = evaluate_five(&five("Qc Qd Qh 9s 2c"));
        assert_eq!(e.category, Category::ThreeOfAKind);

        let e = evaluate_five(&five("Jc Jd 9c 9h 2s"));
        assert_eq!(e.category, Category::TwoPair);

        let e = evaluate_five(&five("Ah Ad 10s 9c 2d"));
        assert_eq!(e.category, Category::Pair);

        let e = evaluate_five(&five("Ah Kd 7s 5c 2d"));
        assert_eq!(e.category, Category::HighCard);
    }

    #[test]
    fn category_ordinals_run_one_through_ten() {
        assert_eq!(Category::HighCard.ordinal(), 1);
        assert_eq!(Category::Straight.ordinal(), 5);
        assert_eq!(Category::StraightFlush.ordinal(), 9);
        assert_eq!(Category::RoyalFlush.ordinal(), 10);
        assert!(Category::RoyalFlush > Category::StraightFlush);
    }

    #[test]
    fn category_labels_read_like_poker() {
        assert_eq!(Category::RoyalFlush.label(), "Royal Flush");
        assert_eq!(Category::ThreeOfAKind.to_string(), "Three of a Kind");
    }

    #[test]
    fn seven_card_royal_with_noise() {
        let cards = parse_cards("As Ks Qs Js 10s 2h 3d").unwrap();
        let eval = evaluate_cards(&cards).unwrap();
        assert_eq!(eval.category, Category::RoyalFlush);
        assert_eq!(eval.category.ordinal(), 10);
        assert!(eval.tiebreakers().is_empty());
    }

    #[test]
    fn seven_card_wheel_beats_the_pair() {
        let cards = parse_cards("As 2h 3d 4c 5s 9h 9d").unwrap();
        let eval = evaluate_cards(&cards).unwrap();
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.tiebreakers(), &[Rank::Five]);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = evaluate_five(&five("Ac 2d 3h 4s 5c"));
        let six_high = evaluate_five(&five("2c 3d 4h 5s 6c"));
        assert!(wheel < six_high);
    }

    #[test]
    fn royal_flushes_always_tie() {
        let spades = evaluate_five(&five("As Ks Qs Js 10s"));
        let hearts = evaluate_five(&five("Ah Kh Qh Jh 10h"));
        assert_eq!(spades, hearts);
        assert_eq!(spades.cmp(&hearts), Ordering::Equal);
    }

    #[test]
    fn kickers_break_pair_ties() {
        let king_kicker = evaluate_five(&five("Ah Ad Ks 9c 2d"));
        let queen_kicker = evaluate_five(&five("Ac As Qs 9h 2h"));
        assert!(king_kicker > queen_kicker);
    }

    #[test]
    fn category_dominates_kickers() {
        let low_pair = evaluate_five(&five("2h 2d 5s 4c 3d"));
        let ace_high = evaluate_five(&five("Ah Kd Qs Jc 9d"));
        assert!(low_pair > ace_high);
    }
}
