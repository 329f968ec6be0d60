use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_holdem, Category, EvalError};
use crate::hand::{Board, HandError, HoleCards};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Heads-up tables seat exactly two players.
pub const SEATS: usize = 2;

/// The opposing seat at a two-seat table.
///
/// The whole state machine leans on this: positions, turn order and the
/// closure rule are all expressed against "the other seat", which is what
/// limits the engine to heads-up play.
pub const fn other_seat(seat: usize) -> usize {
    seat ^ 1
}

/// Betting streets plus the terminal showdown stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Preflop => "Pre-Flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A betting action.
///
/// `Raise { to }` carries the actor's **total** street commitment, not the
/// increment: raising to 60 over a 20 bet costs a player who already has 20
/// in another 40 chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise { to: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerState {
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) bet: u64,
    pub(crate) status: PlayerStatus,
    pub(crate) hole: Option<HoleCards>,
}

impl PlayerState {
    fn new(name: impl Into<String>, chips: u64) -> Self {
        Self { name: name.into(), chips, bet: 0, status: PlayerStatus::Active, hole: None }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's remaining chips
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the player's bet on the current street
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's status
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the player's hole cards
    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn is_folded(&self) -> bool {
        matches!(self.status, PlayerStatus::Folded)
    }

    pub fn is_all_in(&self) -> bool {
        matches!(self.status, PlayerStatus::AllIn)
    }
}

/// Table stakes: starting stack and blind sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakes {
    pub starting_stack: u64,
    pub small_blind: u64,
    pub big_blind: u64,
}

impl Default for Stakes {
    fn default() -> Self {
        Self { starting_stack: 1000, small_blind: 10, big_blind: 20 }
    }
}

/// Who took the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winners {
    Seat(usize),
    Split,
}

impl Winners {
    /// Winning seat indices; both seats on a split.
    pub fn seats(&self) -> Vec<usize> {
        match self {
            Winners::Seat(seat) => vec![*seat],
            Winners::Split => vec![0, 1],
        }
    }
}

/// How the last hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandOutcome {
    pub winners: Winners,
    /// Winning hand category; absent when the hand ended on a fold.
    pub category: Option<Category>,
    /// The pot that was paid out.
    pub pot: u64,
}

/// What happened during a transition, in play order.
///
/// The machine layer turns these into timestamped log records; the pure
/// core itself never does I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandEvent {
    HoleCardsDealt { seat: usize, cards: [Card; 2] },
    ActionTaken { seat: usize, action: Action, paid: u64, stage: Stage },
    CommunityDealt { stage: Stage, cards: Vec<Card> },
    HandEnded { outcome: HandOutcome },
}

/// A successful transition: the next snapshot plus everything that happened.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<HandEvent>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand in progress")]
    HandNotActive,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("cannot check facing a bet: {owed} owed")]
    CheckOwesCall { owed: u64 },
    #[error("raise target must exceed the current bet: current {current}, target {target}")]
    RaiseBelowBet { current: u64, target: u64 },
    #[error("raise exceeds stack: max total {max}, target {target}")]
    RaiseOverStack { max: u64, target: u64 },
    #[error("seat {0} has no hole cards at showdown")]
    NoHoleCards(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("dealt hole cards are invalid: {0}")]
    Deal(#[from] HandError),
    #[error("showdown evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Immutable snapshot of a heads-up table.
///
/// Transitions never mutate: [`GameState::begin_hand`] and
/// [`GameState::apply`] take `&self` and return a fresh snapshot plus the
/// events it produced, or an error that leaves the original untouched.
/// The snapshot owns its deck, so dealing stays pure too.
///
/// ```
/// use headsup_holdem::deck::Deck;
/// use headsup_holdem::state::{Action, GameState, Stage, Stakes};
///
/// let mut deck = Deck::standard();
/// deck.shuffle_seeded(7);
///
/// let table = GameState::new(Stakes::default());
/// let hand = table.begin_hand(deck).unwrap();
/// assert_eq!(hand.state.pot(), 30); // blinds 10 + 20
///
/// // Dealer (small blind) completes, big blind checks: the flop comes down.
/// let called = hand.state.apply(Action::Call).unwrap();
/// let flop = called.state.apply(Action::Check).unwrap();
/// assert_eq!(flop.state.stage(), Stage::Flop);
/// assert_eq!(flop.state.board().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameState {
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
    pub(crate) starting_stack: u64,

    pub(crate) deck: Deck,
    pub(crate) board: Board,
    pub(crate) players: [PlayerState; SEATS],
    pub(crate) pot: u64,
    pub(crate) stage: Stage,
    pub(crate) current_bet: u64,
    pub(crate) dealer: usize,
    pub(crate) turn: usize,
    pub(crate) acted: [bool; SEATS],
    pub(crate) hand_active: bool,
    pub(crate) outcome: Option<HandOutcome>,
}

impl GameState {
    /// Fresh inactive table at the given stakes, both seats at the starting
    /// stack, dealer button on seat 0.
    pub fn new(stakes: Stakes) -> Self {
        Self {
            small_blind: stakes.small_blind,
            big_blind: stakes.big_blind,
            starting_stack: stakes.starting_stack,
            deck: Deck::standard(),
            board: Board::empty(),
            players: [
                PlayerState::new("Player 1", stakes.starting_stack),
                PlayerState::new("Player 2", stakes.starting_stack),
            ],
            pot: 0,
            stage: Stage::Preflop,
            current_bet: 0,
            dealer: 0,
            turn: 0,
            acted: [false; SEATS],
            hand_active: false,
            outcome: None,
        }
    }

    /// Returns the small blind amount
    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    /// Returns the big blind amount
    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    /// Returns the starting stack amount
    pub fn starting_stack(&self) -> u64 {
        self.starting_stack
    }

    /// Returns a reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both seats in seat order
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Returns one seat
    pub fn player(&self, seat: usize) -> &PlayerState {
        &self.players[seat]
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the table's current bet level for this street
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Returns the dealer seat (posts the small blind heads-up)
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Returns the seat whose turn it is
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns whether the seat has acted on the current street
    pub fn has_acted(&self, seat: usize) -> bool {
        self.acted[seat]
    }

    /// Returns whether a hand is in progress
    pub fn hand_active(&self) -> bool {
        self.hand_active
    }

    /// Returns how the last hand ended, if one has finished
    pub fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Chips the seat must add to stay in the hand.
    pub fn to_call(&self, seat: usize) -> u64 {
        self.current_bet.saturating_sub(self.players[seat].bet)
    }

    /// Total chips on the table: both stacks plus the pot. Invariant under
    /// every transition.
    pub fn chips_in_play(&self) -> u64 {
        self.players.iter().map(|p| p.chips).sum::<u64>() + self.pot
    }

    /// Start a new hand from the supplied (already shuffled) deck.
    ///
    /// Deals two hole cards per seat in seat order, posts the blinds
    /// (dealer posts the small blind, the other seat the big blind, each
    /// capped at the player's stack), and gives the dealer the first turn.
    /// Rejected while a hand is in progress; `reset_chips` is the only way
    /// to abandon one.
    pub fn begin_hand(&self, deck: Deck) -> Result<Transition, ActionError> {
        if self.hand_active {
            return Err(ActionError::HandInProgress);
        }
        let total_before = self.chips_in_play();

        let mut next = self.clone();
        let mut events = Vec::new();

        next.deck = deck;
        next.board = Board::empty();
        next.stage = Stage::Preflop;
        next.current_bet = 0;
        next.acted = [false; SEATS];
        next.outcome = None;
        for player in &mut next.players {
            player.bet = 0;
            player.status = PlayerStatus::Active;
            player.hole = None;
        }

        for seat in 0..SEATS {
            let first = next.deck.deal()?;
            let second = next.deck.deal()?;
            let hole = HoleCards::try_new(first, second)?;
            next.players[seat].hole = Some(hole);
            events.push(HandEvent::HoleCardsDealt { seat, cards: hole.as_array() });
        }

        let small_blind = next.small_blind;
        let big_blind = next.big_blind;
        let sb_seat = next.dealer;
        let bb_seat = other_seat(sb_seat);
        let sb_paid = next.commit(sb_seat, small_blind);
        let bb_paid = next.commit(bb_seat, big_blind);
        // A short-stacked blind may post less than the other; the table bet
        // is whatever the larger post actually was.
        next.current_bet = sb_paid.max(bb_paid);

        next.turn = next.dealer;
        next.hand_active = true;

        debug_assert_eq!(next.chips_in_play(), total_before, "chip conservation violated");
        Ok(Transition { state: next, events })
    }

    /// Apply one action for the seat whose turn it is.
    ///
    /// Every rejection leaves the snapshot untouched; the caller keeps the
    /// previous state and may resubmit.
    pub fn apply(&self, action: Action) -> Result<Transition, ActionError> {
        if !self.hand_active {
            return Err(ActionError::HandNotActive);
        }
        let total_before = self.chips_in_play();
        let seat = self.turn;
        let stage = self.stage;

        let mut next = self.clone();
        let mut events = Vec::new();

        let paid = match action {
            Action::Fold => {
                next.players[seat].status = PlayerStatus::Folded;
                events.push(HandEvent::ActionTaken { seat, action, paid: 0, stage });
                next.settle(Winners::Seat(other_seat(seat)), None, &mut events);
                debug_assert_eq!(next.chips_in_play(), total_before, "chip conservation violated");
                return Ok(Transition { state: next, events });
            }
            Action::Check => {
                let owed = self.to_call(seat);
                if owed > 0 {
                    return Err(ActionError::CheckOwesCall { owed });
                }
                0
            }
            Action::Call => {
                // Calling with nothing owed, or with an empty stack, is a
                // legal zero-chip action that still counts as acting.
                next.commit(seat, self.to_call(seat))
            }
            Action::Raise { to } => {
                if to <= self.current_bet {
                    return Err(ActionError::RaiseBelowBet {
                        current: self.current_bet,
                        target: to,
                    });
                }
                let player = &self.players[seat];
                let delta = to - player.bet;
                if delta > player.chips {
                    return Err(ActionError::RaiseOverStack {
                        max: player.bet + player.chips,
                        target: to,
                    });
                }
                let paid = next.commit(seat, delta);
                next.current_bet = to;
                paid
            }
        };

        events.push(HandEvent::ActionTaken { seat, action, paid, stage });
        next.acted[seat] = true;
        next.advance_after(seat, &mut events)?;

        debug_assert_eq!(next.chips_in_play(), total_before, "chip conservation violated");
        Ok(Transition { state: next, events })
    }

    /// Abandon any hand in progress and return both seats to the starting
    /// stack. The pot is not settled; the dealer button stays put.
    pub fn reset_chips(&self) -> GameState {
        let stack = self.starting_stack;
        let mut next = self.clone();
        next.deck = Deck::standard();
        next.board = Board::empty();
        next.pot = 0;
        next.stage = Stage::Preflop;
        next.current_bet = 0;
        next.turn = next.dealer;
        next.acted = [false; SEATS];
        next.hand_active = false;
        next.outcome = None;
        for player in &mut next.players {
            player.chips = stack;
            player.bet = 0;
            player.status = PlayerStatus::Active;
            player.hole = None;
        }
        next
    }

    /// Seat-scoped view: own hole cards plus public opponent information.
    /// The opponent's hole cards appear only at showdown.
    pub fn view(&self, seat: usize) -> PlayerView {
        let opponent = &self.players[other_seat(seat)];
        PlayerView {
            seat,
            hole: self.players[seat].hole,
            chips: self.players[seat].chips,
            bet: self.players[seat].bet,
            to_call: self.to_call(seat),
            your_turn: self.hand_active && self.turn == seat,
            opponent_chips: opponent.chips,
            opponent_bet: opponent.bet,
            opponent_folded: opponent.is_folded(),
            opponent_hole: if self.stage == Stage::Showdown { opponent.hole } else { None },
            board: self.board.as_slice().to_vec(),
            pot: self.pot,
            stage: self.stage,
        }
    }

    /// Banner text for the last finished hand, if any.
    pub fn winner_message(&self) -> Option<String> {
        let outcome = self.outcome?;
        Some(match outcome.winners {
            Winners::Split => "Split pot!".to_string(),
            Winners::Seat(seat) => {
                let name = self.players[seat].name();
                let pot = outcome.pot;
                match outcome.category {
                    Some(category) => format!("{name} wins {pot} chips with {category}!"),
                    None => format!("{name} wins {pot} chips!"),
                }
            }
        })
    }

    /// Move up to `amount` from the seat's stack into the pot and its
    /// street bet. Emptying the stack marks the seat all-in.
    fn commit(&mut self, seat: usize, amount: u64) -> u64 {
        let player = &mut self.players[seat];
        let paid = amount.min(player.chips);
        player.chips -= paid;
        player.bet += paid;
        if player.chips == 0 {
            player.status = PlayerStatus::AllIn;
        }
        self.pot += paid;
        paid
    }

    /// Post-action bookkeeping: close the street or pass the turn.
    ///
    /// The street closes when the other seat cannot respond (folded or
    /// all-in), or when bets are level and the other seat has already acted
    /// this street. Acted flags are never cleared mid-street; a raise keeps
    /// the street open through the bet-level condition instead.
    fn advance_after(&mut self, seat: usize, events: &mut Vec<HandEvent>) -> Result<(), ActionError> {
        let other = other_seat(seat);
        let other_player = &self.players[other];
        let other_out = matches!(other_player.status, PlayerStatus::Folded | PlayerStatus::AllIn);
        let bets_level = self.players[seat].bet == other_player.bet;

        if other_out || (bets_level && self.acted[other]) {
            self.close_street(events)?;
        } else {
            self.turn = other;
        }
        Ok(())
    }

    /// Close the current street: clear street bets and acted flags, hand
    /// the turn to the non-dealer, and deal the next street. After the
    /// river this resolves the showdown instead.
    fn close_street(&mut self, events: &mut Vec<HandEvent>) -> Result<(), ActionError> {
        for player in &mut self.players {
            player.bet = 0;
        }
        self.current_bet = 0;
        self.acted = [false; SEATS];
        self.turn = other_seat(self.dealer);

        match self.stage {
            Stage::Preflop => {
                let cards = self.deck.deal_n(3)?;
                self.board.extend(cards.iter().copied());
                self.stage = Stage::Flop;
                events.push(HandEvent::CommunityDealt { stage: Stage::Flop, cards });
            }
            Stage::Flop => {
                let card = self.deck.deal()?;
                self.board.push(card);
                self.stage = Stage::Turn;
                events.push(HandEvent::CommunityDealt { stage: Stage::Turn, cards: vec![card] });
            }
            Stage::Turn => {
                let card = self.deck.deal()?;
                self.board.push(card);
                self.stage = Stage::River;
                events.push(HandEvent::CommunityDealt { stage: Stage::River, cards: vec![card] });
            }
            Stage::River => {
                self.stage = Stage::Showdown;
                self.resolve_showdown(events)?;
            }
            Stage::Showdown => {}
        }
        Ok(())
    }

    /// Evaluate both seats' seven cards and settle the pot.
    fn resolve_showdown(&mut self, events: &mut Vec<HandEvent>) -> Result<(), ActionError> {
        let hole0 = self.players[0].hole.ok_or(ActionError::NoHoleCards(0))?;
        let hole1 = self.players[1].hole.ok_or(ActionError::NoHoleCards(1))?;
        let eval0 = evaluate_holdem(&hole0, &self.board)?;
        let eval1 = evaluate_holdem(&hole1, &self.board)?;

        let (winners, category) = match eval0.cmp(&eval1) {
            Ordering::Greater => (Winners::Seat(0), Some(eval0.category)),
            Ordering::Less => (Winners::Seat(1), Some(eval1.category)),
            Ordering::Equal => (Winners::Split, Some(eval0.category)),
        };
        self.settle(winners, category, events);
        Ok(())
    }

    /// Pay out the pot, record the outcome, and rotate the dealer button.
    fn settle(&mut self, winners: Winners, category: Option<Category>, events: &mut Vec<HandEvent>) {
        let pot = self.pot;
        match winners {
            Winners::Seat(seat) => {
                self.players[seat].chips += pot;
            }
            Winners::Split => {
                let half = pot / 2;
                self.players[0].chips += half;
                self.players[1].chips += half;
                // The odd chip goes to the non-dealer.
                self.players[other_seat(self.dealer)].chips += pot - half * 2;
            }
        }
        self.pot = 0;
        for player in &mut self.players {
            player.bet = 0;
        }
        let outcome = HandOutcome { winners, category, pot };
        self.outcome = Some(outcome);
        self.hand_active = false;
        self.dealer = other_seat(self.dealer);
        events.push(HandEvent::HandEnded { outcome });
    }
}

/// What one seat is allowed to see mid-hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct PlayerView {
    pub seat: usize,
    pub hole: Option<HoleCards>,
    pub chips: u64,
    pub bet: u64,
    pub to_call: u64,
    pub your_turn: bool,
    pub opponent_chips: u64,
    pub opponent_bet: u64,
    pub opponent_folded: bool,
    /// Revealed only at showdown.
    pub opponent_hole: Option<HoleCards>,
    pub board: Vec<Card>,
    pub pot: u64,
    pub stage: Stage,
}
