use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandRank};

/// Лучшая 5-карточная рука из карманных карт и борда.
///
/// Работает для любого числа карт: при 5–7 перебирает все пятёрки, при
/// меньшем числе оценивает то, что есть (стрит и флеш тогда невозможны).
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let cards: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();

    if cards.len() <= 5 {
        return evaluate_cards(&cards);
    }

    let n = cards.len();
    let mut best = HandRank(0);
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_cards(&five));
                    }
                }
            }
        }
    }
    best
}

/// Оценка не более чем пяти карт.
pub fn evaluate_cards(cards: &[Card]) -> HandRank {
    if cards.is_empty() {
        return HandRank(0);
    }

    let mut counts = [0u8; 15];
    let mut mask: u16 = 0;
    for card in cards {
        counts[card.rank.value() as usize] += 1;
        mask |= 1 << card.rank.value();
    }

    let complete = cards.len() == 5;
    let flush = complete && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = if complete { straight_high(mask) } else { None };

    // (кол-во, ранг) по убыванию: сначала каре/сеты/пары, потом кикеры.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .filter_map(|&r| {
            let n = counts[r.value() as usize];
            (n > 0).then_some((n, r))
        })
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let top = groups[0].0;
    let second = groups.get(1).map_or(0, |g| g.0);

    let category = match (straight, flush, top, second) {
        (Some(_), true, _, _) => HandCategory::StraightFlush,
        (_, _, 4, _) => HandCategory::FourOfAKind,
        (_, _, 3, 2) => HandCategory::FullHouse,
        (_, true, _, _) => HandCategory::Flush,
        (Some(_), _, _, _) => HandCategory::Straight,
        (_, _, 3, _) => HandCategory::ThreeOfAKind,
        (_, _, 2, 2) => HandCategory::TwoPair,
        (_, _, 2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match straight {
        Some(high) if matches!(category, HandCategory::Straight | HandCategory::StraightFlush) => {
            HandRank::new(category, &[high])
        }
        _ => {
            let ranks: Vec<Rank> = groups.iter().map(|g| g.1).collect();
            HandRank::new(category, &ranks)
        }
    }
}

/// Старшая карта стрита в маске рангов (бит = номинал), колесо A-5 → пятёрка.
fn straight_high(mut mask: u16) -> Option<Rank> {
    if mask & (1 << Rank::Ace.value()) != 0 {
        mask |= 1 << 1;
    }
    (5..=14u8).rev().find_map(|high| {
        let window = 0b1_1111u16 << (high - 4);
        (mask & window == window).then(|| Rank::from_value(high)).flatten()
    })
}
