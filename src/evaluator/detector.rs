use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation, TieBreakers};

/// Strategy pattern: each category detector knows how to detect and build its evaluation.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: ten through ace, all same suit. No tie-breakers; royals only chop.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
            && analysis.straight_info.is_straight
            && analysis.straight_info.top_rank == Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::RoyalFlush, TieBreakers::new(&[]))
    }
}

/// Straight Flush: five consecutive ranks, all same suit, below ace-high.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
            && analysis.straight_info.is_straight
            && analysis.straight_info.top_rank != Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top_rank = analysis.straight_info.top_rank.unwrap();
        analysis.build_evaluation(Category::StraightFlush, TieBreakers::new(&[top_rank]))
    }
}

/// Four of a Kind: four cards of the same rank.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let quad_rank = analysis.rank_groups.quad().unwrap();
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::FourOfAKind, TieBreakers::new(&[quad_rank, kicker]))
    }
}

/// Full House: three of a kind plus a pair.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().unwrap();
        let pair = analysis.rank_groups.pairs()[0];
        analysis.build_evaluation(Category::FullHouse, TieBreakers::new(&[trips, pair]))
    }
}

/// Flush: all five cards of the same suit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        // All five ranks break ties in a flush.
        analysis.build_evaluation(Category::Flush, TieBreakers::new(&analysis.ranks))
    }
}

/// Straight: five consecutive ranks (not all same suit).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top_rank = analysis.straight_info.top_rank.unwrap();
        analysis.build_evaluation(Category::Straight, TieBreakers::new(&[top_rank]))
    }
}

/// Three of a Kind: three cards of the same rank.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().unwrap();
        let kickers = analysis.rank_groups.kickers();
        analysis
            .build_evaluation(Category::ThreeOfAKind, TieBreakers::new(&[trips, kickers[0], kickers[1]]))
    }
}

/// Two Pair: two pairs of cards.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pairs = analysis.rank_groups.pairs();
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::TwoPair, TieBreakers::new(&[pairs[0], pairs[1], kicker]))
    }
}

/// One Pair: two cards of the same rank.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pair = analysis.rank_groups.pairs()[0];
        let kickers = analysis.rank_groups.kickers();
        analysis.build_evaluation(
            Category::Pair,
            TieBreakers::new(&[pair, kickers[0], kickers[1], kickers[2]]),
        )
    }
}

/// High Card: no matching ranks or sequences.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard, TieBreakers::new(&analysis.ranks))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    #[test]
    fn royal_flush_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(RoyalFlushDetector.detect(&analysis));
        // An ace-high straight flush is a royal, never a plain straight flush.
        assert!(!StraightFlushDetector.detect(&analysis));

        let eval = RoyalFlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::RoyalFlush);
        assert!(eval.tiebreakers().is_empty());
    }

    #[test]
    fn straight_flush_detector() {
        let cards = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(StraightFlushDetector.detect(&analysis));
        assert!(!RoyalFlushDetector.detect(&analysis));

        let eval = StraightFlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(eval.tiebreakers(), &[Rank::Nine]);
    }

    #[test]
    fn steel_wheel_is_a_straight_flush_not_a_royal() {
        let cards = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(StraightFlushDetector.detect(&analysis));
        assert!(!RoyalFlushDetector.detect(&analysis));

        let eval = StraightFlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.tiebreakers(), &[Rank::Five]);
    }

    #[test]
    fn four_of_a_kind_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FourOfAKindDetector.detect(&analysis));
        let eval = FourOfAKindDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::FourOfAKind);
        assert_eq!(eval.tiebreakers(), &[Rank::Ace, Rank::King]);
    }

    #[test]
    fn full_house_detector() {
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FullHouseDetector.detect(&analysis));
        let eval = FullHouseDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::FullHouse);
        assert_eq!(eval.tiebreakers(), &[Rank::King, Rank::Queen]);
    }

    #[test]
    fn flush_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(FlushDetector.detect(&analysis));
        let eval = FlushDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Flush);
        assert_eq!(eval.tiebreakers(), &[Rank::Ace, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two]);
    }

    #[test]
    fn straight_detector() {
        let cards = [
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Five, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(StraightDetector.detect(&analysis));
        let eval = StraightDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Straight);
        assert_eq!(eval.tiebreakers(), &[Rank::Nine]);
    }

    #[test]
    fn three_of_a_kind_detector() {
        let cards = [
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(ThreeOfAKindDetector.detect(&analysis));
        let eval = ThreeOfAKindDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::ThreeOfAKind);
        assert_eq!(eval.tiebreakers(), &[Rank::Jack, Rank::Nine, Rank::Seven]);
    }

    #[test]
    fn two_pair_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(TwoPairDetector.detect(&analysis));
        let eval = TwoPairDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::TwoPair);
        assert_eq!(eval.tiebreakers(), &[Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn one_pair_detector() {
        let cards = [
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Three, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(OnePairDetector.detect(&analysis));
        let eval = OnePairDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Pair);
        assert_eq!(eval.tiebreakers(), &[Rank::Jack, Rank::Nine, Rank::Seven, Rank::Three]);
    }

    #[test]
    fn high_card_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(HighCardDetector.detect(&analysis));
        let eval = HighCardDetector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::HighCard);
    }

    #[test]
    fn detector_priority_straight_flush_over_flush() {
        let cards = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);

        // Flush and straight detectors also match; the ordering in DETECTORS
        // makes the straight flush win.
        assert!(StraightFlushDetector.detect(&analysis));
        assert!(FlushDetector.detect(&analysis));
        assert!(StraightDetector.detect(&analysis));
    }
}
