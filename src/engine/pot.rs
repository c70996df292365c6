use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Один банк (основной или сайд-пот).
///
/// `highest_amount` — потолок вклада в этот банк: игрок, внёсший столько,
/// полностью покрыл банк. `highest_bet` — абсолютный уровень суммарной ставки
/// за раздачу, на котором банк закрывается; по нему упорядочена лестница банков.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub contributors: BTreeMap<PlayerId, Chips>,
    pub stake: Chips,
    pub highest_amount: Chips,
    pub highest_bet: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Пустой банк, который начинается с уровня `highest_bet`.
    pub fn with_highest_bet(highest_bet: Chips) -> Self {
        Self {
            highest_bet,
            ..Self::default()
        }
    }

    /// Сколько игрок уже внёс в этот банк.
    pub fn contribution(&self, player: PlayerId) -> Chips {
        self.contributors.get(&player).copied().unwrap_or(Chips::ZERO)
    }

    /// Сколько игроку осталось доложить до потолка.
    pub fn owed_by(&self, player: PlayerId) -> Chips {
        self.highest_amount.saturating_sub(self.contribution(player))
    }

    pub fn is_contributor(&self, player: PlayerId) -> bool {
        self.contributors.contains_key(&player)
    }

    /// Положить `amount` от игрока. Если вклад поднялся выше потолка, потолок
    /// сдвигается; при `auto_set_highest_bet` вместе с ним сдвигается и `highest_bet`.
    pub fn increase_stakes(&mut self, amount: Chips, player: PlayerId, auto_set_highest_bet: bool) {
        if amount.is_zero() {
            return;
        }

        let level = {
            let entry = self.contributors.entry(player).or_insert(Chips::ZERO);
            *entry += amount;
            *entry
        };
        self.stake += amount;

        if level > self.highest_amount {
            let raised_by = level - self.highest_amount;
            self.highest_amount = level;
            if auto_set_highest_bet {
                self.highest_bet += raised_by;
            }
        }
    }

    /// stake == сумме вкладов и ни один вклад не выше потолка.
    pub fn is_consistent(&self) -> bool {
        let total: Chips = self.contributors.values().sum();
        total == self.stake && self.contributors.values().all(|c| *c <= self.highest_amount)
    }
}
