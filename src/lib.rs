//! Движок одного стола Texas Hold'em.
//!
//! Правила и состояние раздачи без UI и сети: ростер, блайнды, улицы,
//! лестница банков с сайд-потами, шоудаун с делёжкой.
//! Драйвер (CLI, бот, симулятор) сам решает, кто и что делает,
//! а `engine::Table` следит за протоколом и сохранением фишек.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{BetRound, Card, Chips, OddChipRule, Player, PlayerId, TableConfig};
pub use engine::{EngineError, PlayerAction, PlayerActionKind, SettlementReport, Table};
