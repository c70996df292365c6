//! Оценка рук: категории, кикеры, стрит с тузом снизу, ранг для стола.

use holdem_table::domain::Card;
use holdem_table::eval::{
    evaluate_best_hand, evaluate_cards, HandCategory, HandEvaluator, HandRank, StandardEvaluator,
};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn category(s: &str) -> HandCategory {
    evaluate_cards(&cards(s)).category()
}

#[test]
fn five_card_categories() {
    assert_eq!(category("Ah Kd 9c 7s 2h"), HandCategory::HighCard);
    assert_eq!(category("Ah Ad 9c 7s 2h"), HandCategory::OnePair);
    assert_eq!(category("Ah Ad 9c 9s 2h"), HandCategory::TwoPair);
    assert_eq!(category("Ah Ad Ac 9s 2h"), HandCategory::ThreeOfAKind);
    assert_eq!(category("9h Td Jc Qs Kh"), HandCategory::Straight);
    assert_eq!(category("Ah 2d 3c 4s 5h"), HandCategory::Straight);
    assert_eq!(category("Ah Jh 9h 7h 2h"), HandCategory::Flush);
    assert_eq!(category("Ah Ad Ac 9s 9h"), HandCategory::FullHouse);
    assert_eq!(category("Ah Ad Ac As 9h"), HandCategory::FourOfAKind);
    assert_eq!(category("9h Th Jh Qh Kh"), HandCategory::StraightFlush);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate_cards(&cards("Ah 2d 3c 4s 5h"));
    let six_high = evaluate_cards(&cards("2d 3c 4s 5h 6c"));
    assert!(six_high > wheel);
}

#[test]
fn kickers_break_ties_within_category() {
    let aces_king = evaluate_cards(&cards("Ah Ad Kc 7s 2h"));
    let aces_queen = evaluate_cards(&cards("As Ac Qc 7d 2d"));
    assert!(aces_king > aces_queen);

    let same = evaluate_cards(&cards("As Ac Kd 7c 2c"));
    assert_eq!(aces_king, same);
}

#[test]
fn best_five_of_seven() {
    let rank = evaluate_best_hand(&cards("Ah Kh"), &cards("Qh Jh Th 2c 2d"));
    assert_eq!(rank.category(), HandCategory::StraightFlush);

    let rank = evaluate_best_hand(&cards("2c 7d"), &cards("Ah Ad Ac Kd Ks"));
    assert_eq!(rank.category(), HandCategory::FullHouse);
}

#[test]
fn table_rank_is_lower_for_stronger_hands() {
    let board = cards("2c 7d 9h Js Kd");
    let pair = StandardEvaluator.evaluate(&cards("Kh 3c"), &board);
    let trips = StandardEvaluator.evaluate(&cards("Kh Kc"), &board);
    assert!(trips < pair);

    let split_a = StandardEvaluator.evaluate(&cards("3h 4h"), &board);
    let split_b = StandardEvaluator.evaluate(&cards("3d 4d"), &board);
    assert_eq!(split_a, split_b);
}

#[test]
fn hand_rank_category_round_trips() {
    assert!(HandRank(0).to_table_rank() <= HandRank::CEILING);
    assert_eq!(HandRank(0).category(), HandCategory::HighCard);
    assert_eq!(HandCategory::StraightFlush.describe(), "Straight flush");
}
