use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Игрок за столом. Живёт между раздачами, пока не обнулится стек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Ставка на текущей улице.
    pub bet: Chips,
    /// Фишки в стеке (ещё не поставленные).
    pub stakes: Chips,
    /// Карманные карты (две после раздачи).
    pub hand: Vec<Card>,
    /// Уравнял текущую ставку на этой улице.
    pub has_called: bool,
    /// Сбросил карты в этой раздаче.
    pub folded: bool,
}

impl Player {
    pub fn new(id: PlayerId, stakes: Chips) -> Self {
        Self {
            id,
            bet: Chips::ZERO,
            stakes,
            hand: Vec::new(),
            has_called: false,
            folded: false,
        }
    }

    pub fn is_all_in(&self) -> bool {
        self.stakes.is_zero()
    }

    /// Всё ещё претендует на банк.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Сброс перед новой раздачей.
    pub fn reset_for_round(&mut self, hand: Vec<Card>) {
        self.bet = Chips::ZERO;
        self.hand = hand;
        self.has_called = false;
        self.folded = false;
    }

    /// Переложить из стека в ставку не более `amount`. Возвращает реально поставленное.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.stakes);
        self.stakes -= paid;
        self.bet += paid;
        paid
    }

    pub fn bet_small_blind(&mut self, small_blind: Chips) -> Chips {
        self.commit(small_blind)
    }

    pub fn bet_big_blind(&mut self, big_blind: Chips) -> Chips {
        self.commit(big_blind)
    }

    pub fn fold(&mut self) {
        self.folded = true;
        self.has_called = false;
    }
}
