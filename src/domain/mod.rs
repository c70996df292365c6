//! Доменная модель стола: карты, фишки, колода, игроки, фазы раздачи, конфиг.

pub mod bet_round;
pub mod card;
pub mod chips;
pub mod deck;
pub mod player;
pub mod table;

/// Стабильный идентификатор игрока. Банки ссылаются на игроков только по нему.
pub type PlayerId = u64;

pub use bet_round::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use player::*;
pub use table::*;
