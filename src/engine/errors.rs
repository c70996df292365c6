use thiserror::Error;

use crate::domain::{BetRound, Chips, PlayerId};

/// Нарушение конфигурации стола: ошибка входных данных, повторять бессмысленно.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("блайнд не может быть отрицательным: {0}")]
    NegativeBlind(i64),

    #[error("большой блайнд ({big}) меньше малого ({small})")]
    BigBlindBelowSmall { small: Chips, big: Chips },

    #[error("для раздачи нужно минимум 2 игрока, за столом {0}")]
    NotEnoughPlayers(usize),

    #[error("в колоде не хватит карт на {0} игроков")]
    TooManyPlayers(usize),

    #[error("игрок {0} уже сидит за столом")]
    DuplicatePlayer(PlayerId),

    #[error("битый конфиг: {0}")]
    InvalidJson(String),
}

/// Нарушение протокола: драйвер вызвал операцию не в том порядке.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("не все активные игроки уравняли ставку")]
    PlayersNotMatched,

    #[error("операция недоступна в фазе {0}")]
    InvalidPhase(BetRound),

    #[error("предыдущая раздача не рассчитана")]
    RoundInProgress,

    #[error("сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerId),

    #[error("игрок {0} не участвует в раздаче")]
    UnknownPlayer(PlayerId),

    #[error("игрок {0} остался один и не может сбросить")]
    LastActivePlayer(PlayerId),
}

/// Действие игрока недопустимо при текущих ставках.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("check невозможен: нужно доплатить {0}")]
    CannotCheck(Chips),

    #[error("call невозможен: нечего уравнивать")]
    CannotCall,

    #[error("рейз до {target} меньше минимального {min_total}")]
    RaiseTooSmall { target: Chips, min_total: Chips },

    #[error("не хватает фишек: нужно {needed}, в стеке {stack}")]
    NotEnoughChips { needed: Chips, stack: Chips },

    #[error("стек пуст, ставить нечего")]
    NothingToBet,
}

/// Общая ошибка движка стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Action(#[from] ActionError),
}
