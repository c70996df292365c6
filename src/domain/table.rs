use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::ConfigError;

/// Что делать с фишками, которые не делятся поровну между победителями.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OddChipRule {
    /// Остаток от деления никому не достаётся (попадает в `SettlementReport::discarded`).
    #[default]
    Discard,
    /// Остаток раздаётся по одной фишке, начиная с первого получателя слева от дилера.
    FirstAfterDealer,
}

/// Конфиг стола: блайнды и правило нечётной фишки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub odd_chip_rule: OddChipRule,
}

impl TableConfig {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Result<Self, ConfigError> {
        let config = Self {
            small_blind,
            big_blind,
            odd_chip_rule: OddChipRule::Discard,
        };
        config.validate()?;
        Ok(config)
    }

    /// Конструктор из знаковых чисел (так блайнды приходят от внешних драйверов).
    pub fn from_blinds(small_blind: i64, big_blind: i64) -> Result<Self, ConfigError> {
        let small = u64::try_from(small_blind).map_err(|_| ConfigError::NegativeBlind(small_blind))?;
        let big = u64::try_from(big_blind).map_err(|_| ConfigError::NegativeBlind(big_blind))?;
        Self::new(Chips(small), Chips(big))
    }

    /// Загрузить и проверить конфиг из JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_odd_chip_rule(mut self, rule: OddChipRule) -> Self {
        self.odd_chip_rule = rule;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind < self.small_blind {
            return Err(ConfigError::BigBlindBelowSmall {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips(25),
            big_blind: Chips(50),
            odd_chip_rule: OddChipRule::Discard,
        }
    }
}
