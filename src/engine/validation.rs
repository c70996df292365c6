use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::ActionError;

/// Проверить действие и посчитать, сколько фишек игрок кладёт из стека.
///
/// `current_bet` — наибольшая ставка на улице, `min_raise` — минимальный
/// шаг повышения. Fold всегда допустим и ничего не стоит.
pub fn validate_action(
    player: &Player,
    action: &PlayerActionKind,
    current_bet: Chips,
    min_raise: Chips,
) -> Result<Chips, ActionError> {
    let to_call = current_bet.saturating_sub(player.bet);
    let stack = player.stakes;

    match *action {
        PlayerActionKind::Fold => Ok(Chips::ZERO),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(Chips::ZERO)
            } else {
                Err(ActionError::CannotCheck(to_call))
            }
        }

        // Колл на весь стек при нехватке фишек — это олл-ин колл.
        PlayerActionKind::Call => {
            if to_call.is_zero() {
                Err(ActionError::CannotCall)
            } else {
                Ok(to_call.min(stack))
            }
        }

        PlayerActionKind::Raise(target) => {
            let needed = target.saturating_sub(player.bet);
            if needed > stack {
                return Err(ActionError::NotEnoughChips { needed, stack });
            }

            let min_total = current_bet + min_raise;
            let all_in = needed == stack;
            if target <= current_bet || (target < min_total && !all_in) {
                return Err(ActionError::RaiseTooSmall { target, min_total });
            }

            Ok(needed)
        }

        PlayerActionKind::AllIn => {
            if stack.is_zero() {
                Err(ActionError::NothingToBet)
            } else {
                Ok(stack)
            }
        }
    }
}
