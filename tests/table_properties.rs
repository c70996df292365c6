//! Свойства стола на случайных раздачах (proptest):
//! - фишки не появляются и не пропадают (кроме сгоревших при делении);
//! - лестница банков упорядочена, каждый банк согласован;
//! - ход никогда не достаётся сбросившему, олл-ину или уже уравнявшему;
//! - при раскладке ставок по лестнице сумма банков растёт ровно на ставку.

use holdem_table::domain::{Chips, OddChipRule, Player, PlayerId, TableConfig};
use holdem_table::engine::{PlayerAction, PlayerActionKind, PotLadder, SettlementReport, Table};
use holdem_table::eval::StandardEvaluator;
use holdem_table::infra::DeterministicRng;
use proptest::prelude::*;

type TestTable = Table<StandardEvaluator, DeterministicRng>;

const MAX_STEPS: usize = 500;

fn build_table(stacks: &[u64], seed: u64, rule: OddChipRule) -> TestTable {
    let config = TableConfig::new(Chips(5), Chips(10))
        .unwrap()
        .with_odd_chip_rule(rule);
    let mut table =
        Table::with_config(config, StandardEvaluator, DeterministicRng::from_seed(seed)).unwrap();
    for (i, stack) in stacks.iter().enumerate() {
        table
            .add_player(Player::new(i as PlayerId + 1, Chips(*stack)))
            .unwrap();
    }
    table
}

fn check_invariants(table: &TestTable, total: Chips) -> Result<(), TestCaseError> {
    prop_assert_eq!(table.chips_in_play(), total);

    let pots = table.pots();
    prop_assert!(pots.windows(2).all(|w| w[0].highest_bet <= w[1].highest_bet));
    prop_assert!(pots.iter().all(|p| p.is_consistent()));

    if let Some(next) = table.next_player() {
        prop_assert!(!next.folded);
        prop_assert!(!next.is_all_in());
        prop_assert!(!next.has_called);
        prop_assert!(table.active_players().contains(&next.id));
    }
    Ok(())
}

/// Выбрать действие по очередному байту; недопустимое заменить на check/call.
fn choose(table: &TestTable, id: PlayerId, choice: u8) -> PlayerActionKind {
    match choice % 6 {
        0 => PlayerActionKind::Fold,
        1 => PlayerActionKind::AllIn,
        2 | 3 => {
            let step = table.min_raise().0 * (choice as u64 % 3 + 1);
            PlayerActionKind::Raise(table.current_bet() + Chips(step))
        }
        _ => passive(table, id),
    }
}

fn passive(table: &TestTable, id: PlayerId) -> PlayerActionKind {
    match table.to_call(id) {
        Some(c) if !c.is_zero() => PlayerActionKind::Call,
        _ => PlayerActionKind::Check,
    }
}

/// Сыграть раздачу до конца, проверяя инварианты после каждого шага.
fn play_round(
    table: &mut TestTable,
    choices: &[u8],
    total: Chips,
) -> Result<SettlementReport, TestCaseError> {
    table.new_round().unwrap();
    check_invariants(table, total)?;

    let mut choices = choices.iter().copied().cycle();
    let mut steps = 0;

    while table.phase().is_betting() {
        while let Some(id) = table.next_player_id() {
            steps += 1;
            prop_assert!(steps < MAX_STEPS, "раздача не заканчивается");

            let kind = choose(table, id, choices.next().unwrap_or(4));
            if table.apply_action(PlayerAction::new(id, kind)).is_err() {
                let fallback = passive(table, id);
                table.apply_action(PlayerAction::new(id, fallback)).unwrap();
            }
            check_invariants(table, total)?;
        }
        table.start_next_bet_round().unwrap();
        check_invariants(table, total)?;
    }

    Ok(table.end_round().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn chips_are_conserved_across_rounds(
        stacks in prop::collection::vec(1u64..400, 2..7),
        choices in prop::collection::vec(any::<u8>(), 1..64),
        seed in any::<u64>(),
    ) {
        let mut table = build_table(&stacks, seed, OddChipRule::FirstAfterDealer);
        let total = table.chips_in_play();

        for _ in 0..5 {
            if table.players().len() < 2 {
                break;
            }
            let report = play_round(&mut table, &choices, total)?;
            prop_assert_eq!(report.discarded, Chips::ZERO);
            prop_assert_eq!(report.total_awarded(), report.total_pot);
            prop_assert_eq!(table.chips_in_play(), total);
            prop_assert!(table.players().iter().all(|p| !p.stakes.is_zero()));
        }
    }

    #[test]
    fn discarded_chips_account_for_the_difference(
        stacks in prop::collection::vec(1u64..400, 2..7),
        choices in prop::collection::vec(any::<u8>(), 1..64),
        seed in any::<u64>(),
    ) {
        let mut table = build_table(&stacks, seed, OddChipRule::Discard);
        let mut total = table.chips_in_play();

        for _ in 0..5 {
            if table.players().len() < 2 {
                break;
            }
            let report = play_round(&mut table, &choices, total)?;
            prop_assert_eq!(report.total_awarded() + report.discarded, report.total_pot);
            prop_assert_eq!(table.chips_in_play() + report.discarded, total);
            total = table.chips_in_play();
        }
    }

    #[test]
    fn ladder_bets_add_exactly_the_amount(
        bets in prop::collection::vec((1u64..5, 1u64..200, any::<bool>()), 1..20),
    ) {
        let mut ladder = PotLadder::new();
        let mut all_in: Vec<PlayerId> = Vec::new();
        let mut expected = Chips::ZERO;

        for (player, amount, goes_all_in) in bets {
            // Олл-ин игрок больше не ставит.
            if all_in.contains(&player) {
                continue;
            }
            if goes_all_in {
                all_in.push(player);
            }
            ladder.bet(Chips(amount), player, |id| all_in.contains(&id));
            expected += Chips(amount);

            prop_assert_eq!(ladder.total(), expected);
            prop_assert!(ladder.is_ordered());
            prop_assert!(ladder.pots().iter().all(|p| p.is_consistent()));
        }
    }
}
