//! Арифметика мест: всё по кругу, по модулю размера ростера.

/// Следующее место по кругу. Для пустого ростера — 0.
pub fn next_seat(seat: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (seat + 1) % len
    }
}

/// Следующая кнопка: первая раздача — место 0, дальше по кругу.
pub fn next_dealer(dealer: Option<usize>, len: usize) -> usize {
    match dealer {
        Some(d) => next_seat(d, len),
        None => 0,
    }
}

/// Малый и большой блайнд. Хедз-ап: малый блайнд ставит дилер.
pub fn blind_seats(dealer: usize, len: usize) -> (usize, usize) {
    let small = if len == 2 { dealer } else { next_seat(dealer, len) };
    (small, next_seat(small, len))
}

/// Все места по кругу, начиная со `start`.
pub fn seats_from(start: usize, len: usize) -> impl Iterator<Item = usize> {
    (0..len).map(move |i| (start + i) % len)
}
