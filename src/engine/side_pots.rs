use log::debug;

use crate::domain::chips::Chips;
use crate::engine::pot::Pot;

/// Расщепить банк `pots[index]`, когда игрок идёт олл-ин ниже его потолка.
///
/// `level` — вклад олл-ин игрока в этот банк после его ставки. Банк
/// закрывается на этом уровне, всё, что другие игроки внесли сверх него,
/// переезжает в новый сайд-пот со старым `highest_bet`. Лестница после
/// этого снова отсортирована по `highest_bet`.
pub fn split_pot(pots: &mut Vec<Pot>, index: usize, level: Chips) {
    let Some(pot) = pots.get_mut(index) else {
        return;
    };
    if level >= pot.highest_amount {
        return;
    }

    let lowered_by = pot.highest_amount - level;
    let mut side_pot = Pot::with_highest_bet(pot.highest_bet);
    pot.highest_bet -= lowered_by;
    pot.highest_amount = level;

    for (&player, contributed) in pot.contributors.iter_mut() {
        if *contributed > level {
            let excess = *contributed - level;
            side_pot.increase_stakes(excess, player, false);
            *contributed = level;
        }
    }
    pot.stake -= side_pot.stake;

    debug!(
        "split pot #{index} at {level}: main {} / side {} (cap {})",
        pot.stake, side_pot.stake, side_pot.highest_amount
    );

    pots.push(side_pot);
    pots.sort_by_key(|p| p.highest_bet);
}
