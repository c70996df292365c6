//! Движок стола: ставки, лестница банков, переход улиц, шоудаун.
//!
//! Высокоуровневый объект: `Table`
//! Основные операции:
//!   - `new_round` – кнопка, раздача карт, блайнды
//!   - `apply_action` / `fold` – действие игрока, чей ход
//!   - `start_next_bet_round` – следующая улица или шоудаун
//!   - `end_round` – расчёт банков и вылет игроков с нулевым стеком

pub mod actions;
pub mod errors;
pub mod ladder;
pub mod positions;
pub mod pot;
pub mod showdown;
pub mod side_pots;
pub mod table;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::{ActionError, ConfigError, EngineError, ProtocolError};
pub use ladder::PotLadder;
pub use pot::Pot;
pub use showdown::{settle_pots, AwardReason, PotAward, SettlementReport};
pub use side_pots::split_pot;
pub use table::Table;

/// RNG интерфейс для движка.
/// Реализации лежат в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
