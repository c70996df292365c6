// src/bin/holdem_dev_cli.rs

use std::env;
use std::fs;

use holdem_table::domain::{Chips, Player, TableConfig};
use holdem_table::engine::{ConfigError, EngineError, PlayerAction, PlayerActionKind, Table};
use holdem_table::eval::{evaluate_best_hand, StandardEvaluator};
use holdem_table::infra::DeterministicRng;

const PLAYERS: u64 = 4;
const STACK: u64 = 1_000;
const MAX_HANDS: usize = 20;

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("holdem_dev_cli: стартуем пассивный стол…");

    // 1. Конфиг: путь к JSON первым аргументом, иначе блайнды по умолчанию.
    let config = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| ConfigError::InvalidJson(format!("{path}: {e}")))?;
            TableConfig::from_json(&json)?
        }
        None => TableConfig::default(),
    };
    let seed = env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    println!(
        "блайнды {}/{}, odd chip: {:?}, seed {seed}",
        config.small_blind, config.big_blind, config.odd_chip_rule
    );

    // 2. Стол и игроки
    let mut table = Table::with_config(config, StandardEvaluator, DeterministicRng::from_seed(seed))?;
    for id in 1..=PLAYERS {
        table.add_player(Player::new(id, Chips::new(STACK)))?;
    }
    let total = table.chips_in_play();

    // 3. Раздачи: все только чекают или коллируют
    for hand_no in 1..=MAX_HANDS {
        if table.players().len() < 2 {
            break;
        }
        println!();
        println!("================ HAND #{hand_no} =================");

        table.new_round()?;
        play_passively(&mut table)?;

        println!("борд: {:?}", table.board());
        for p in table.players().iter().filter(|p| p.is_in_hand()) {
            let rank = evaluate_best_hand(&p.hand, table.board());
            println!("  игрок {} {:?}: {}", p.id, p.hand, rank.category().describe());
        }
        let report = table.end_round()?;
        for award in &report.awards {
            println!(
                "  банк #{}: игрок {} получает {} ({:?})",
                award.pot_index, award.player, award.amount, award.reason
            );
        }
        if !report.discarded.is_zero() {
            println!("  сгорело при делении: {}", report.discarded);
        }
        if !report.evicted.is_empty() {
            println!("  вылетели: {:?}", report.evicted);
        }

        for p in table.players() {
            println!("  игрок {}: {}", p.id, p.stakes);
        }
        println!(
            "  фишек на столе: {} (было {}, сгорело всего {})",
            table.chips_in_play(),
            total,
            total - table.chips_in_play()
        );
    }

    println!();
    println!("holdem_dev_cli: готово.");
    Ok(())
}

/// Довести раздачу до шоудауна: каждый чекает, если можно, иначе коллирует.
fn play_passively(table: &mut Table<StandardEvaluator, DeterministicRng>) -> Result<(), EngineError> {
    while table.phase().is_betting() {
        while let Some(id) = table.next_player_id() {
            let kind = match table.to_call(id) {
                Some(c) if !c.is_zero() => PlayerActionKind::Call,
                _ => PlayerActionKind::Check,
            };
            table.apply_action(PlayerAction::new(id, kind))?;
        }
        table.start_next_bet_round()?;
    }
    Ok(())
}
