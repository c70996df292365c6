use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::pot::Pot;
use crate::engine::side_pots::split_pot;

/// Лестница банков раздачи: основной банк и сайд-поты по возрастанию `highest_bet`.
/// Последний банк — текущий, в него идут новые повышения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawLadder")]
pub struct PotLadder {
    pots: Vec<Pot>,
}

#[derive(Deserialize)]
struct RawLadder {
    pots: Vec<Pot>,
}

impl From<RawLadder> for PotLadder {
    fn from(raw: RawLadder) -> Self {
        Self::from_pots(raw.pots)
    }
}

impl PotLadder {
    /// Лестница из одного пустого банка.
    pub fn new() -> Self {
        Self {
            pots: vec![Pot::new()],
        }
    }

    /// Лестница из готовых банков; через неё же идёт десериализация.
    pub fn from_pots(mut pots: Vec<Pot>) -> Self {
        if pots.is_empty() {
            pots.push(Pot::new());
        }
        pots.sort_by_key(|p| p.highest_bet);
        Self { pots }
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn len(&self) -> usize {
        self.pots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pots.is_empty()
    }

    pub fn current(&self) -> &Pot {
        // Не пуста: `new` и `from_pots` кладут хотя бы один банк.
        &self.pots[self.pots.len() - 1]
    }

    /// Все фишки во всех банках.
    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.stake).sum()
    }

    /// Отсортирована ли лестница по `highest_bet`.
    pub fn is_ordered(&self) -> bool {
        self.pots.windows(2).all(|w| w[0].highest_bet <= w[1].highest_bet)
    }

    /// Разложить ставку игрока по лестнице.
    ///
    /// Банки обходятся от младшего к текущему: в каждом игрок доплачивает до
    /// потолка. Не хватает — банк расщепляется на уровне игрока, остаток ложится
    /// в уменьшенный банк, дальше не идём. Всё, что осталось после обхода,
    /// поднимает текущий банк. Если текущий банк уже закрыт олл-ином другого
    /// игрока на потолке, под остаток открывается новый банк.
    ///
    /// `is_all_in` отвечает, сидит ли игрок в олл-ине.
    pub fn bet<F>(&mut self, amount: Chips, player: PlayerId, is_all_in: F)
    where
        F: Fn(PlayerId) -> bool,
    {
        let mut remaining = amount;
        let mut index = 0;

        while index < self.pots.len() {
            if remaining.is_zero() {
                return;
            }

            let owed = self.pots[index].owed_by(player);
            if remaining < owed {
                let level = self.pots[index].contribution(player) + remaining;
                debug!("player {player} short by {} in pot #{index}", owed - remaining);
                split_pot(&mut self.pots, index, level);
                self.pots[index].increase_stakes(remaining, player, true);
                return;
            }

            self.pots[index].increase_stakes(owed, player, true);
            remaining -= owed;
            index += 1;
        }

        if remaining.is_zero() {
            return;
        }

        if self.current_capped_by_all_in(player, &is_all_in) {
            let floor = self.current().highest_bet;
            debug!("pot #{} capped by all-in, opening pot at {floor}", self.pots.len() - 1);
            self.pots.push(Pot::with_highest_bet(floor));
        }

        let last = self.pots.len() - 1;
        self.pots[last].increase_stakes(remaining, player, true);
    }

    fn current_capped_by_all_in<F>(&self, player: PlayerId, is_all_in: &F) -> bool
    where
        F: Fn(PlayerId) -> bool,
    {
        let current = self.current();
        current
            .contributors
            .iter()
            .any(|(&id, &c)| id != player && c == current.highest_amount && is_all_in(id))
    }
}

impl Default for PotLadder {
    fn default() -> Self {
        Self::new()
    }
}
