use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Поднять ставку на улице до указанной суммы (не на сумму).
    Raise(Chips),
    /// Поставить весь стек.
    AllIn,
}

/// Действие конкретного игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player: PlayerId,
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player: PlayerId, kind: PlayerActionKind) -> Self {
        Self { player, kind }
    }
}
