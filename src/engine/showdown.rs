use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::table::OddChipRule;
use crate::domain::PlayerId;
use crate::engine::pot::Pot;
use crate::eval::HandEvaluator;

/// За что игрок получил фишки из банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AwardReason {
    /// Все вкладчики банка сбросили — банк возвращается поровну.
    Refund,
    /// Единственный претендент.
    Uncontested,
    /// Победа (или сплит) на шоудауне с этим рангом.
    Showdown { rank: u32 },
}

/// Выплата одному игроку из одного банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotAward {
    pub pot_index: usize,
    pub player: PlayerId,
    pub amount: Chips,
    pub reason: AwardReason,
}

/// Итог расчёта раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementReport {
    pub awards: Vec<PotAward>,
    /// Фишки, не доставшиеся никому при делении (правило `OddChipRule::Discard`).
    pub discarded: Chips,
    /// Сумма всех банков до расчёта.
    pub total_pot: Chips,
    /// Игроки, вылетевшие с нулевым стеком.
    pub evicted: Vec<PlayerId>,
    /// Банки в том виде, в каком их рассчитали.
    pub pots: Vec<Pot>,
}

impl SettlementReport {
    pub fn awarded_to(&self, player: PlayerId) -> Chips {
        self.awards
            .iter()
            .filter(|a| a.player == player)
            .map(|a| a.amount)
            .sum()
    }

    pub fn total_awarded(&self) -> Chips {
        self.awards.iter().map(|a| a.amount).sum()
    }
}

/// Рассчитать все банки и зачислить выигрыши в стеки игроков.
///
/// Каждый банк независим: претенденты — вкладчики, которые не сбросили.
/// `seat_order` — игроки по кругу начиная слева от дилера; в этом порядке
/// раздаются нечётные фишки при `OddChipRule::FirstAfterDealer`.
pub fn settle_pots<E: HandEvaluator>(
    pots: &[Pot],
    players: &mut [Player],
    board: &[Card],
    evaluator: &E,
    rule: OddChipRule,
    seat_order: &[PlayerId],
) -> SettlementReport {
    let mut report = SettlementReport {
        total_pot: pots.iter().map(|p| p.stake).sum(),
        pots: pots.to_vec(),
        ..SettlementReport::default()
    };

    for (pot_index, pot) in pots.iter().enumerate() {
        if pot.contributors.is_empty() {
            continue;
        }

        let eligible: Vec<PlayerId> = pot
            .contributors
            .keys()
            .copied()
            .filter(|id| players.iter().any(|p| p.id == *id && p.is_in_hand()))
            .collect();

        let (recipients, reason): (Vec<PlayerId>, AwardReason) = match eligible.len() {
            0 => (pot.contributors.keys().copied().collect(), AwardReason::Refund),
            1 => (eligible, AwardReason::Uncontested),
            _ => {
                let ranked: Vec<(PlayerId, u32)> = eligible
                    .iter()
                    .map(|&id| {
                        let hand = players
                            .iter()
                            .find(|p| p.id == id)
                            .map(|p| p.hand.as_slice())
                            .unwrap_or(&[]);
                        (id, evaluator.evaluate(hand, board))
                    })
                    .collect();
                let best = ranked.iter().map(|(_, r)| *r).min().unwrap_or(u32::MAX);
                let winners = ranked
                    .iter()
                    .filter(|(_, r)| *r == best)
                    .map(|(id, _)| *id)
                    .collect();
                (winners, AwardReason::Showdown { rank: best })
            }
        };

        distribute(pot_index, pot.stake, recipients, reason, rule, seat_order, players, &mut report);
    }

    info!(
        "settled {} pot(s): total {}, awarded {}, discarded {}",
        pots.len(),
        report.total_pot,
        report.total_awarded(),
        report.discarded
    );
    report
}

#[allow(clippy::too_many_arguments)]
fn distribute(
    pot_index: usize,
    stake: Chips,
    mut recipients: Vec<PlayerId>,
    reason: AwardReason,
    rule: OddChipRule,
    seat_order: &[PlayerId],
    players: &mut [Player],
    report: &mut SettlementReport,
) {
    recipients.sort_by_key(|id| seat_order.iter().position(|s| s == id).unwrap_or(usize::MAX));

    let (share, remainder) = stake.split(recipients.len());
    let odd_chips = match rule {
        OddChipRule::Discard => {
            report.discarded += remainder;
            0
        }
        OddChipRule::FirstAfterDealer => remainder.0 as usize,
    };

    for (i, id) in recipients.into_iter().enumerate() {
        let amount = if i < odd_chips { share + Chips(1) } else { share };
        if amount.is_zero() {
            continue;
        }
        if let Some(p) = players.iter_mut().find(|p| p.id == id) {
            p.stakes += amount;
        }
        debug!("pot #{pot_index}: {amount} to player {id} ({reason:?})");
        report.awards.push(PotAward {
            pot_index,
            player: id,
            amount,
            reason,
        });
    }
}
