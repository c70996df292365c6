//! Оценка силы рук (Texas Hold'em).
//!
//! Стол зависит только от трейта `HandEvaluator`: ранг — число, меньше = сильнее.
//! `StandardEvaluator` — обычная оценка лучшей пятёрки из 7 карт.

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{evaluate_best_hand, evaluate_cards};
pub use hand_rank::{HandCategory, HandRank};

use crate::domain::card::Card;

/// Оракул силы руки для шоудауна.
pub trait HandEvaluator {
    /// Ранг руки `hand` на борде `board`. Меньше = сильнее, равные ранги делят банк.
    fn evaluate(&self, hand: &[Card], board: &[Card]) -> u32;
}

/// Любое замыкание с подходящей сигнатурой тоже оракул (удобно для тестов).
impl<F> HandEvaluator for F
where
    F: Fn(&[Card], &[Card]) -> u32,
{
    fn evaluate(&self, hand: &[Card], board: &[Card]) -> u32 {
        self(hand, board)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn evaluate(&self, hand: &[Card], board: &[Card]) -> u32 {
        evaluate_best_hand(hand, board).to_table_rank()
    }
}
