use log::{debug, info};

use crate::domain::{BetRound, Card, Chips, Deck, Player, PlayerId, TableConfig};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::{ConfigError, EngineError, ProtocolError};
use crate::engine::ladder::PotLadder;
use crate::engine::pot::Pot;
use crate::engine::positions::{blind_seats, next_dealer, next_seat, seats_from};
use crate::engine::showdown::{settle_pots, SettlementReport};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;
use crate::eval::{HandEvaluator, StandardEvaluator};
use crate::infra::rng::SystemRng;

/// Карт на борде к шоудауну.
const FULL_BOARD: usize = 5;

/// Один стол: ростер, банки, борд, фаза и очередь хода.
///
/// Драйвер вызывает `new_round`, затем по очереди отдаёт действия игрока,
/// на которого указывает `next_player`, двигает улицы через
/// `start_next_bet_round` и на шоудауне вызывает `end_round`.
#[derive(Debug)]
pub struct Table<E = StandardEvaluator, R = SystemRng> {
    config: TableConfig,
    /// Ростер в порядке мест.
    players: Vec<Player>,
    /// Индекс дилера в ростере (None до первой раздачи).
    dealer: Option<usize>,
    small_blind_player: Option<PlayerId>,
    big_blind_player: Option<PlayerId>,
    /// Кто ещё в раздаче, в порядке мест. Сбросившие удаляются.
    active_players: Vec<PlayerId>,
    pots: PotLadder,
    board: Vec<Card>,
    deck: Deck,
    bet_round: BetRound,
    /// Минимальный шаг повышения на текущей улице.
    last_bet_raise_delta: Chips,
    /// Индекс в `active_players` того, кто ходит; None — улица закрыта.
    next_player_idx: Option<usize>,
    evaluator: E,
    rng: R,
}

impl Table<StandardEvaluator, SystemRng> {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Result<Self, ConfigError> {
        Self::with_config(
            TableConfig::new(small_blind, big_blind)?,
            StandardEvaluator,
            SystemRng,
        )
    }
}

impl<E: HandEvaluator, R: RandomSource> Table<E, R> {
    pub fn with_config(config: TableConfig, evaluator: E, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            last_bet_raise_delta: config.big_blind,
            config,
            players: Vec::new(),
            dealer: None,
            small_blind_player: None,
            big_blind_player: None,
            active_players: Vec::new(),
            pots: PotLadder::new(),
            board: Vec::new(),
            deck: Deck::standard_52(),
            bet_round: BetRound::GameOver,
            next_player_idx: None,
            evaluator,
            rng,
        })
    }

    /// Посадить игрока на следующее свободное место.
    pub fn add_player(&mut self, player: Player) -> Result<(), ConfigError> {
        if self.players.iter().any(|p| p.id == player.id) {
            return Err(ConfigError::DuplicatePlayer(player.id));
        }
        debug!("player {} seated with {}", player.id, player.stakes);
        self.players.push(player);
        Ok(())
    }

    /// Новая раздача: кнопка, колода, карманные карты, блайнды.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        let len = self.players.len();
        if len < 2 {
            return Err(ConfigError::NotEnoughPlayers(len).into());
        }
        if 2 * len + FULL_BOARD > Deck::SIZE {
            return Err(ConfigError::TooManyPlayers(len).into());
        }
        if self.bet_round != BetRound::GameOver && !self.pots.total().is_zero() {
            return Err(ProtocolError::RoundInProgress.into());
        }

        let dealer = next_dealer(self.dealer, len);
        let (small_seat, big_seat) = blind_seats(dealer, len);

        self.dealer = Some(dealer);
        self.active_players = self.players.iter().map(|p| p.id).collect();
        self.pots = PotLadder::new();
        self.deck = Deck::shuffled(&mut self.rng);
        self.bet_round = BetRound::Preflop;
        self.board.clear();
        self.last_bet_raise_delta = self.config.big_blind;

        for player in self.players.iter_mut() {
            let hand = self.deck.draw(2);
            player.reset_for_round(hand);
        }

        let small_id = self.players[small_seat].id;
        let paid = self.players[small_seat].bet_small_blind(self.config.small_blind);
        self.bet(paid, small_id)?;

        let big_id = self.players[big_seat].id;
        let paid = self.players[big_seat].bet_big_blind(self.config.big_blind);
        self.bet(paid, big_id)?;

        self.small_blind_player = Some(small_id);
        self.big_blind_player = Some(big_id);

        // Большой блайнд уже стоит на уровне ставки, олл-ин игрокам ходить нечем.
        for player in self.players.iter_mut() {
            if player.id == big_id || player.is_all_in() {
                player.has_called = true;
            }
        }

        self.next_player_idx = if self.all_players_called() {
            None
        } else {
            Some(self.skip_matched_from(next_seat(big_seat, len)))
        };

        info!(
            "round started: dealer seat {dealer}, small blind {small_id}, big blind {big_id}, pot {}",
            self.pots.total()
        );
        Ok(())
    }

    /// Разложить `amount` фишек игрока по лестнице банков.
    ///
    /// Только учёт банков: стек и ставку игрока двигает вызывающий
    /// (`Player::commit` или `apply_action`). Вне улиц ставок не принимается.
    pub fn bet(&mut self, amount: Chips, player: PlayerId) -> Result<(), EngineError> {
        self.ensure_betting()?;
        let players = &self.players;
        self.pots.bet(amount, player, |id| {
            players.iter().any(|p| p.id == id && p.is_all_in())
        });
        debug!("player {player} bet {amount}, pot value {}", self.pots.total());
        Ok(())
    }

    /// Передать ход.
    ///
    /// Если все уравняли, хода нет. Иначе после обычного действия сдвигаемся
    /// на одно место, после фолда индекс только нормализуется (ростер уже
    /// сдвинулся), и дальше пропускаем тех, кто уже уравнял.
    pub fn set_next_player(&mut self, folded: bool) -> Result<(), EngineError> {
        self.ensure_betting()?;
        if self.all_players_called() {
            self.next_player_idx = None;
            return Ok(());
        }

        let len = self.active_players.len();
        let start = match (self.next_player_idx, folded) {
            (Some(idx), false) => next_seat(idx, len),
            (Some(idx), true) => idx % len,
            (None, _) => self.first_active_after_dealer().unwrap_or(0),
        };
        let idx = self.skip_matched_from(start);
        self.next_player_idx = Some(idx);
        debug!("next to act: player {}", self.active_players[idx]);
        Ok(())
    }

    /// Перейти к следующей улице.
    pub fn start_next_bet_round(&mut self) -> Result<(), EngineError> {
        let next = match self.bet_round {
            BetRound::Preflop => BetRound::Flop,
            BetRound::Flop => BetRound::Turn,
            BetRound::Turn => BetRound::River,
            BetRound::River => BetRound::Showdown,
            phase @ (BetRound::Showdown | BetRound::GameOver) => {
                return Err(ProtocolError::InvalidPhase(phase).into());
            }
        };

        if !self.all_players_called() {
            return Err(ProtocolError::PlayersNotMatched.into());
        }

        self.last_bet_raise_delta = self.config.big_blind;

        if self.active_players.len() == 1 {
            self.enter_showdown();
            return Ok(());
        }

        if self.check_everyone_all_in() {
            let missing = FULL_BOARD.saturating_sub(self.board.len());
            let cards = self.deck.draw(missing);
            self.board.extend(cards);
            self.enter_showdown();
            return Ok(());
        }

        if next == BetRound::Showdown {
            self.enter_showdown();
            return Ok(());
        }

        let cards = self.deck.draw(next.board_cards_on_entry());
        self.board.extend(cards);
        self.bet_round = next;
        self.reset_players_called_var();
        self.next_player_idx = self.first_active_after_dealer();

        info!("{next}: board {}", format_cards(&self.board));
        Ok(())
    }

    /// Рассчитать банки на шоудауне, убрать вылетевших и закрыть раздачу.
    pub fn end_round(&mut self) -> Result<SettlementReport, EngineError> {
        match self.bet_round {
            BetRound::Showdown => {}
            phase @ (BetRound::Preflop
            | BetRound::Flop
            | BetRound::Turn
            | BetRound::River
            | BetRound::GameOver) => {
                return Err(ProtocolError::InvalidPhase(phase).into());
            }
        }

        let seat_order = self.seat_order_after_dealer();
        let mut report = settle_pots(
            self.pots.pots(),
            &mut self.players,
            &self.board,
            &self.evaluator,
            self.config.odd_chip_rule,
            &seat_order,
        );

        report.evicted = self.evict_busted();
        self.pots = PotLadder::new();
        self.next_player_idx = None;
        self.bet_round = BetRound::GameOver;

        info!(
            "round over: {} player(s) left, evicted {:?}",
            self.players.len(),
            report.evicted
        );
        Ok(report)
    }

    /// Действие игрока, чей сейчас ход.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<(), EngineError> {
        self.ensure_betting()?;
        if self.next_player_id() != Some(action.player) {
            return Err(ProtocolError::NotPlayersTurn(action.player).into());
        }

        let kind = match action.kind {
            PlayerActionKind::Fold => return self.fold(action.player),
            kind => kind,
        };

        let current_bet = self.current_bet();
        let min_raise = self.last_bet_raise_delta;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == action.player)
            .ok_or(ProtocolError::UnknownPlayer(action.player))?;

        let amount = validate_action(player, &kind, current_bet, min_raise)?;
        let paid = player.commit(amount);
        let new_bet = player.bet;
        player.has_called = true;

        self.bet(paid, action.player)?;

        if new_bet > current_bet {
            let raised_by = new_bet - current_bet;
            if raised_by >= min_raise {
                self.last_bet_raise_delta = raised_by;
            }
            self.reopen_action(action.player);
        }

        debug!("player {} {:?} for {paid}", action.player, kind);
        self.set_next_player(false)
    }

    /// Игрок сбрасывает карты и выходит из активного ростера.
    pub fn fold(&mut self, player: PlayerId) -> Result<(), EngineError> {
        self.ensure_betting()?;
        let pos = self
            .active_players
            .iter()
            .position(|&id| id == player)
            .ok_or(ProtocolError::UnknownPlayer(player))?;
        if self.active_players.len() == 1 {
            return Err(ProtocolError::LastActivePlayer(player).into());
        }

        if let Some(p) = self.players.iter_mut().find(|p| p.id == player) {
            p.fold();
        }
        self.active_players.remove(pos);

        if let Some(next) = self.next_player_idx {
            if pos < next {
                self.next_player_idx = Some(next - 1);
            }
        }

        // Последнему оставшемуся уравнивать уже нечего.
        if let [last] = self.active_players[..] {
            if let Some(p) = self.players.iter_mut().find(|p| p.id == last) {
                p.has_called = true;
            }
        }

        debug!("player {player} folds, {} left", self.active_players.len());
        self.set_next_player(true)
    }

    // ------------------------------------------------------------------
    // Запросы
    // ------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Прямой доступ к игроку для драйверов, которые сами двигают стек
    /// (`Player::commit`) и затем зовут `bet`.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn active_players(&self) -> &[PlayerId] {
        &self.active_players
    }

    pub fn dealer(&self) -> Option<usize> {
        self.dealer
    }

    pub fn small_blind_player(&self) -> Option<PlayerId> {
        self.small_blind_player
    }

    pub fn big_blind_player(&self) -> Option<PlayerId> {
        self.big_blind_player
    }

    pub fn phase(&self) -> BetRound {
        self.bet_round
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pots(&self) -> &[Pot] {
        self.pots.pots()
    }

    /// Текущий (самый новый) банк.
    pub fn current_pot(&self) -> &Pot {
        self.pots.current()
    }

    /// Сумма всех банков.
    pub fn pot_value(&self) -> Chips {
        self.pots.total()
    }

    /// Все фишки стола: стеки плюс банки.
    pub fn chips_in_play(&self) -> Chips {
        self.players.iter().map(|p| p.stakes).sum::<Chips>() + self.pot_value()
    }

    pub fn min_raise(&self) -> Chips {
        self.last_bet_raise_delta
    }

    /// Наибольшая ставка на текущей улице.
    pub fn current_bet(&self) -> Chips {
        self.active_players
            .iter()
            .filter_map(|id| self.player(*id))
            .map(|p| p.bet)
            .max()
            .unwrap_or(Chips::ZERO)
    }

    /// Сколько игроку нужно доплатить до колла.
    pub fn to_call(&self, id: PlayerId) -> Option<Chips> {
        self.player(id)
            .map(|p| self.current_bet().saturating_sub(p.bet))
    }

    pub fn next_player_id(&self) -> Option<PlayerId> {
        self.next_player_idx
            .and_then(|idx| self.active_players.get(idx).copied())
    }

    pub fn next_player(&self) -> Option<&Player> {
        self.next_player_id().and_then(|id| self.player(id))
    }

    /// Все активные игроки уравняли ставку (улицу можно закрывать).
    pub fn all_players_called(&self) -> bool {
        self.active_players
            .iter()
            .all(|id| self.player(*id).is_some_and(|p| p.has_called))
    }

    // ------------------------------------------------------------------
    // Внутреннее
    // ------------------------------------------------------------------

    fn ensure_betting(&self) -> Result<(), ProtocolError> {
        if self.bet_round.is_betting() {
            Ok(())
        } else {
            Err(ProtocolError::InvalidPhase(self.bet_round))
        }
    }

    fn is_matched(&self, active_idx: usize) -> bool {
        self.active_players
            .get(active_idx)
            .and_then(|id| self.player(*id))
            .is_some_and(|p| p.has_called)
    }

    /// Первый не уравнявший начиная с `start` (включительно).
    /// Вызывать только когда такой есть, иначе вернётся `start`.
    fn skip_matched_from(&self, start: usize) -> usize {
        let len = self.active_players.len();
        seats_from(start % len.max(1), len)
            .find(|&idx| !self.is_matched(idx))
            .unwrap_or(start)
    }

    /// Первый активный не уравнявший слева от дилера (индекс в `active_players`).
    fn first_active_after_dealer(&self) -> Option<usize> {
        let len = self.players.len();
        let dealer = self.dealer?;
        seats_from(next_seat(dealer, len), len)
            .map(|seat| &self.players[seat])
            .filter(|p| !p.has_called)
            .find_map(|p| self.active_players.iter().position(|&id| id == p.id))
    }

    /// Ростер по кругу, начиная слева от дилера.
    fn seat_order_after_dealer(&self) -> Vec<PlayerId> {
        let len = self.players.len();
        let start = self.dealer.map_or(0, |d| next_seat(d, len));
        seats_from(start, len).map(|seat| self.players[seat].id).collect()
    }

    /// Не больше одного активного игрока может ещё ставить.
    fn check_everyone_all_in(&self) -> bool {
        self.active_players
            .iter()
            .filter_map(|id| self.player(*id))
            .filter(|p| !p.is_all_in())
            .count()
            <= 1
    }

    /// Новая улица: ставки обнуляются, уравнявшими остаются только олл-ины.
    fn reset_players_called_var(&mut self) {
        for player in self.players.iter_mut() {
            player.bet = Chips::ZERO;
            player.has_called = player.is_all_in() && !player.folded;
        }
    }

    /// После повышения все остальные, кто может ставить, снова должны ответить.
    fn reopen_action(&mut self, raiser: PlayerId) {
        for player in self.players.iter_mut() {
            if player.id != raiser
                && self.active_players.contains(&player.id)
                && !player.is_all_in()
            {
                player.has_called = false;
            }
        }
    }

    fn enter_showdown(&mut self) {
        self.bet_round = BetRound::Showdown;
        self.next_player_idx = None;
        info!(
            "showdown: {} player(s), board {}, pot {}",
            self.active_players.len(),
            format_cards(&self.board),
            self.pots.total()
        );
    }

    /// Убрать игроков с нулевым стеком. Сначала собираем id, потом `retain`.
    fn evict_busted(&mut self) -> Vec<PlayerId> {
        let busted: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.stakes.is_zero())
            .map(|p| p.id)
            .collect();
        if busted.is_empty() {
            return busted;
        }

        // Кнопка остаётся на том же месте; если дилер вылетел, она встаёт
        // перед следующим выжившим, чтобы `next_dealer` отдал кнопку ему.
        if let Some(d) = self.dealer {
            let removed_before = self.players[..d]
                .iter()
                .filter(|p| busted.contains(&p.id))
                .count();
            let dealer_busted = busted.contains(&self.players[d].id);
            let survivors = self.players.len() - busted.len();
            self.dealer = match survivors {
                0 => None,
                n => {
                    let base = d - removed_before;
                    Some(if dealer_busted { (base + n - 1) % n } else { base })
                }
            };
        }

        self.players.retain(|p| !busted.contains(&p.id));
        self.active_players.retain(|id| !busted.contains(id));
        busted
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
