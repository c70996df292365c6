use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BetRound {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    /// Раздача рассчитана, дальше только `new_round`.
    GameOver,
}

impl BetRound {
    /// Улица, на которой принимаются ставки.
    pub fn is_betting(self) -> bool {
        match self {
            BetRound::Preflop | BetRound::Flop | BetRound::Turn | BetRound::River => true,
            BetRound::Showdown | BetRound::GameOver => false,
        }
    }

    /// Сколько карт борда открывается при входе в эту фазу.
    pub fn board_cards_on_entry(self) -> usize {
        match self {
            BetRound::Flop => 3,
            BetRound::Turn | BetRound::River => 1,
            BetRound::Preflop | BetRound::Showdown | BetRound::GameOver => 0,
        }
    }
}

impl fmt::Display for BetRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BetRound::Preflop => "preflop",
            BetRound::Flop => "flop",
            BetRound::Turn => "turn",
            BetRound::River => "river",
            BetRound::Showdown => "showdown",
            BetRound::GameOver => "game over",
        };
        f.write_str(name)
    }
}
