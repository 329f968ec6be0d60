use headsup_holdem::cards::{parse_cards, Card, Rank};
use headsup_holdem::evaluator::{
    compare_holdem, evaluate_cards, evaluate_five, evaluate_holdem, Category, EvalError,
};
use headsup_holdem::hand::{Board, HoleCards};
use std::cmp::Ordering;

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

#[test]
fn every_category_is_detected() {
    let ladder: [(&str, Category); 10] = [
        ("Ah Kd 7s 5c 2d", Category::HighCard),
        ("Ah Ad 10s 9c 2d", Category::Pair),
        ("Jc Jd 9c 9h 2s", Category::TwoPair),
        ("Qc Qd Qh 10s 2c", Category::ThreeOfAKind),
        ("Ac 5c 4d 3h 2s", Category::Straight),
        ("Kh 10h 8h 6h 3h", Category::Flush),
        ("3c 3d 3h Js Jc", Category::FullHouse),
        ("9c 9d 9h 9s Ac", Category::FourOfAKind),
        ("9s 8s 7s 6s 5s", Category::StraightFlush),
        ("As Ks Qs Js 10s", Category::RoyalFlush),
    ];

    for (cards, expected) in ladder {
        let eval = evaluate_five(&five(cards));
        assert_eq!(eval.category, expected, "misread {cards}");
    }
}

#[test]
fn category_ordinals_climb_from_one_to_ten() {
    assert_eq!(Category::HighCard.ordinal(), 1);
    assert_eq!(Category::Straight.ordinal(), 5);
    assert_eq!(Category::StraightFlush.ordinal(), 9);
    assert_eq!(Category::RoyalFlush.ordinal(), 10);
}

#[test]
fn royal_flush_outranks_a_king_high_straight_flush() {
    let royal = evaluate_five(&five("As Ks Qs Js 10s"));
    let king_high = evaluate_five(&five("Kh Qh Jh 10h 9h"));
    assert_eq!(royal.category, Category::RoyalFlush);
    assert_eq!(king_high.category, Category::StraightFlush);
    assert!(royal > king_high);
}

#[test]
fn seven_cards_find_the_buried_royal() {
    let eval = evaluate_cards(&parse_cards("2h 7d As Ks Qs Js 10s").unwrap()).unwrap();
    assert_eq!(eval.category, Category::RoyalFlush);
    assert!(eval.tiebreakers().is_empty());
}

#[test]
fn seven_cards_prefer_the_wheel_over_a_pair() {
    let eval = evaluate_cards(&parse_cards("Ah 2d 3s 4c 5h Kd Kc").unwrap()).unwrap();
    assert_eq!(eval.category, Category::Straight);
    assert_eq!(eval.tiebreakers(), &[Rank::Five]);
}

#[test]
fn holdem_showdown_needs_a_full_board() {
    let hole: HoleCards = "As Ah".parse().unwrap();
    let board: Board = "Kc Qd Jh".parse().unwrap();
    let err = evaluate_holdem(&hole, &board).unwrap_err();
    assert!(matches!(err, EvalError::BoardIncomplete(3)));
}

#[test]
fn identical_strength_compares_equal_across_seats() {
    let board: Board = "As Ks Qs Js 9s".parse().unwrap();
    let a: HoleCards = "2h 3d".parse().unwrap();
    let b: HoleCards = "2d 3h".parse().unwrap();
    assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Equal);
}

#[test]
fn kickers_settle_matching_categories() {
    let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
    let aces: HoleCards = "As Ah".parse().unwrap();
    let kings: HoleCards = "Ks Kh".parse().unwrap();
    assert_eq!(compare_holdem(&aces, &kings, &board).unwrap(), Ordering::Greater);

    let better_kicker: HoleCards = "Qd Ad".parse().unwrap();
    let worse_kicker: HoleCards = "Qh 4d".parse().unwrap();
    assert_eq!(
        compare_holdem(&better_kicker, &worse_kicker, &board).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn duplicate_cards_are_rejected() {
    let err = evaluate_cards(&parse_cards("As As Ks Qs Js").unwrap()).unwrap_err();
    assert!(matches!(err, EvalError::DuplicateCard(_)));
}

#[test]
fn card_counts_outside_five_to_seven_are_rejected() {
    let err = evaluate_cards(&parse_cards("As Ks Qs Js").unwrap()).unwrap_err();
    assert!(matches!(err, EvalError::CardCount(4)));

    let eight = parse_cards("As Ks Qs Js 9s 8s 7s 6s").unwrap();
    let err = evaluate_cards(&eight).unwrap_err();
    assert!(matches!(err, EvalError::CardCount(8)));
}
