//! Ошибки конфигурации, протокола и действий.

use holdem_table::domain::{BetRound, Chips, Player, PlayerId, TableConfig};
use holdem_table::engine::{
    ActionError, ConfigError, EngineError, PlayerAction, PlayerActionKind, ProtocolError, Table,
};
use holdem_table::eval::StandardEvaluator;
use holdem_table::infra::NoShuffle;

fn seated(n: u64) -> Table<StandardEvaluator, NoShuffle> {
    let mut table =
        Table::with_config(TableConfig::default(), StandardEvaluator, NoShuffle).unwrap();
    for id in 1..=n {
        table.add_player(Player::new(id, Chips(1000))).unwrap();
    }
    table
}

fn action(player: PlayerId, kind: PlayerActionKind) -> PlayerAction {
    PlayerAction::new(player, kind)
}

//
// ====================== CONFIG ======================
//

#[test]
fn negative_blinds_are_rejected() {
    assert_eq!(
        TableConfig::from_blinds(-5, 10),
        Err(ConfigError::NegativeBlind(-5))
    );
    assert_eq!(
        TableConfig::from_blinds(5, -10),
        Err(ConfigError::NegativeBlind(-10))
    );
    assert!(TableConfig::from_blinds(0, 0).is_ok());
}

#[test]
fn big_blind_below_small_is_rejected() {
    assert_eq!(
        TableConfig::from_blinds(50, 25),
        Err(ConfigError::BigBlindBelowSmall {
            small: Chips(50),
            big: Chips(25)
        })
    );
    assert!(Table::new(Chips(50), Chips(25)).is_err());
}

#[test]
fn broken_json_config_is_rejected() {
    let err = TableConfig::from_json("{ \"small_blind\": 10 ").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));

    let err = TableConfig::from_json(r#"{ "small_blind": 100, "big_blind": 50 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::BigBlindBelowSmall { .. }));
}

#[test]
fn duplicate_player_is_rejected() {
    let mut table = seated(2);
    assert_eq!(
        table.add_player(Player::new(2, Chips(500))),
        Err(ConfigError::DuplicatePlayer(2))
    );
    assert_eq!(table.players().len(), 2);
}

#[test]
fn round_needs_two_players() {
    let mut table = seated(1);
    assert_eq!(
        table.new_round(),
        Err(EngineError::Config(ConfigError::NotEnoughPlayers(1)))
    );
}

#[test]
fn round_needs_enough_cards() {
    // 23 игрока: 46 карманных + 5 на борд = 51, ещё влезает.
    let mut table = seated(23);
    assert!(table.new_round().is_ok());

    let mut table = seated(24);
    assert_eq!(
        table.new_round(),
        Err(EngineError::Config(ConfigError::TooManyPlayers(24)))
    );
}

//
// ====================== PROTOCOL ======================
//

#[test]
fn street_cannot_advance_before_first_round() {
    let mut table = seated(2);
    assert_eq!(
        table.start_next_bet_round(),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::GameOver
        )))
    );
}

#[test]
fn street_cannot_advance_while_bets_unmatched() {
    let mut table = seated(3);
    table.new_round().unwrap();
    assert_eq!(
        table.start_next_bet_round(),
        Err(EngineError::Protocol(ProtocolError::PlayersNotMatched))
    );
    assert_eq!(table.phase(), BetRound::Preflop);
}

#[test]
fn end_round_only_on_showdown() {
    let mut table = seated(2);
    table.new_round().unwrap();
    assert_eq!(
        table.end_round(),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::Preflop
        )))
    );
    assert_eq!(table.pot_value(), Chips(75), "банк не тронут");
}

#[test]
fn new_round_refused_while_pot_is_live() {
    let mut table = seated(2);
    table.new_round().unwrap();
    assert_eq!(
        table.new_round(),
        Err(EngineError::Protocol(ProtocolError::RoundInProgress))
    );
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut table = seated(3);
    table.new_round().unwrap();
    assert_eq!(table.next_player_id(), Some(1));

    assert_eq!(
        table.apply_action(action(3, PlayerActionKind::Check)),
        Err(EngineError::Protocol(ProtocolError::NotPlayersTurn(3)))
    );
    assert_eq!(
        table.apply_action(action(42, PlayerActionKind::Call)),
        Err(EngineError::Protocol(ProtocolError::NotPlayersTurn(42)))
    );
}

#[test]
fn action_outside_betting_is_rejected() {
    let mut table = seated(2);
    assert_eq!(
        table.apply_action(action(1, PlayerActionKind::Check)),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::GameOver
        )))
    );
}

#[test]
fn last_active_player_cannot_fold() {
    let mut table = seated(3);
    table.new_round().unwrap();
    table.fold(1).unwrap();
    table.fold(2).unwrap();

    assert_eq!(
        table.fold(3),
        Err(EngineError::Protocol(ProtocolError::LastActivePlayer(3)))
    );
    assert_eq!(
        table.fold(1),
        Err(EngineError::Protocol(ProtocolError::UnknownPlayer(1)))
    );
}

/// После расчёта банков низкоуровневая ставка отклоняется, и следующая
/// раздача начинается со всеми фишками на месте.
#[test]
fn bet_after_settlement_is_rejected() {
    let mut table = seated(3);
    let before = table.chips_in_play();

    table.new_round().unwrap();
    table.fold(1).unwrap();
    table.fold(2).unwrap();
    table.start_next_bet_round().unwrap();
    assert_eq!(
        table.bet(Chips(200), 3),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::Showdown
        )))
    );
    table.end_round().unwrap();

    assert_eq!(
        table.bet(Chips(200), 3),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::GameOver
        )))
    );
    assert_eq!(
        table.set_next_player(false),
        Err(EngineError::Protocol(ProtocolError::InvalidPhase(
            BetRound::GameOver
        )))
    );
    assert_eq!(table.pot_value(), Chips::ZERO);

    table.new_round().unwrap();
    assert_eq!(table.chips_in_play(), before);
}

//
// ====================== ACTIONS ======================
//

#[test]
fn check_facing_a_bet_is_rejected() {
    let mut table = seated(2);
    table.new_round().unwrap();
    assert_eq!(
        table.apply_action(action(1, PlayerActionKind::Check)),
        Err(EngineError::Action(ActionError::CannotCheck(Chips(25))))
    );
    assert_eq!(table.next_player_id(), Some(1), "ход не ушёл");
}

#[test]
fn raise_below_minimum_is_rejected() {
    let mut table = seated(2);
    table.new_round().unwrap();
    assert_eq!(
        table.apply_action(action(1, PlayerActionKind::Raise(Chips(75)))),
        Err(EngineError::Action(ActionError::RaiseTooSmall {
            target: Chips(75),
            min_total: Chips(100)
        }))
    );
}

#[test]
fn raise_beyond_stack_is_rejected() {
    let mut table = seated(2);
    table.new_round().unwrap();
    assert_eq!(
        table.apply_action(action(1, PlayerActionKind::Raise(Chips(2000)))),
        Err(EngineError::Action(ActionError::NotEnoughChips {
            needed: Chips(1975),
            stack: Chips(975)
        }))
    );
}

#[test]
fn call_with_nothing_to_call_is_rejected() {
    let mut table = seated(2);
    table.new_round().unwrap();
    table.apply_action(action(1, PlayerActionKind::Call)).unwrap();
    table.start_next_bet_round().unwrap();

    assert_eq!(
        table.apply_action(action(2, PlayerActionKind::Call)),
        Err(EngineError::Action(ActionError::CannotCall))
    );
}
