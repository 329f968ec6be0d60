use crate::deck::Deck;
use crate::log::{
    ActionRecord, CommunityCardsRecord, HandEndRecord, HandStartRecord, HoleCardsRecord, LogSink,
    NullSink, PlayerSummary,
};
use crate::state::{Action, ActionError, GameState, HandEvent, PlayerView, Stakes, Transition};
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use std::fmt;

/// Stateful heads-up table: the pure snapshot plus everything the core
/// keeps out of itself.
///
/// `Game` owns the current [`GameState`], the per-hand shuffle seed policy,
/// a hand-id counter, and the injected [`LogSink`]. Transitions happen in
/// the pure core; this layer replaces its snapshot with the result and
/// forwards the transition's events to the sink as timestamped records.
///
/// ```
/// use headsup_holdem::game::Game;
/// use headsup_holdem::state::{Action, Stage, Stakes};
///
/// let mut game = Game::new(Stakes::default());
/// game.set_seed(42); // reproducible deal
/// game.start_hand().unwrap();
///
/// game.apply(Action::Call).unwrap();
/// game.apply(Action::Check).unwrap();
/// assert_eq!(game.state().stage(), Stage::Flop);
/// ```
pub struct Game {
    state: GameState,
    sink: Box<dyn LogSink>,
    seed: Option<u64>,
    hand_seq: u32,
    hand_id: String,
}

impl Game {
    /// New table at the given stakes, logging to nowhere.
    pub fn new(stakes: Stakes) -> Self {
        Self::with_sink(stakes, Box::new(NullSink))
    }

    /// New table that reports hand progress to the given sink.
    pub fn with_sink(stakes: Stakes, sink: Box<dyn LogSink>) -> Self {
        Self {
            state: GameState::new(stakes),
            sink,
            seed: None,
            hand_seq: 0,
            hand_id: String::new(),
        }
    }

    /// Fix the shuffle seed for every following hand. Replaying with the
    /// same seed reproduces the deal exactly.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    /// Drop a fixed seed; following hands shuffle from thread entropy again.
    pub fn clear_seed(&mut self) {
        self.seed = None;
    }

    /// Returns the current table snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the id of the current (or last) hand, once one has started
    pub fn hand_id(&self) -> Option<&str> {
        if self.hand_id.is_empty() {
            None
        } else {
            Some(&self.hand_id)
        }
    }

    /// Shuffle and deal a new hand.
    ///
    /// Each hand draws its own seed (the fixed one, or fresh entropy) and
    /// gets a `YYYYMMDD-NNNNNN` identifier. The start record captures both
    /// stacks before the blinds move.
    pub fn start_hand(&mut self) -> Result<(), ActionError> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);

        let players = self
            .state
            .players()
            .iter()
            .enumerate()
            .map(|(seat, player)| PlayerSummary {
                seat,
                name: player.name().to_string(),
                chips: player.chips(),
            })
            .collect();

        let transition = self.state.begin_hand(deck)?;

        self.hand_seq += 1;
        self.hand_id = format!("{}-{:06}", Utc::now().format("%Y%m%d"), self.hand_seq);
        self.sink.start_hand(&HandStartRecord {
            hand_id: self.hand_id.clone(),
            players,
            seed,
            ts: timestamp(),
        });
        self.adopt(transition);
        Ok(())
    }

    /// Apply one action for the seat whose turn it is.
    ///
    /// Rejections bubble up untouched and leave both the snapshot and the
    /// log exactly as they were.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        let transition = self.state.apply(action)?;
        self.adopt(transition);
        Ok(())
    }

    /// Abandon any hand in progress and return both stacks to the starting
    /// amount. The dealer button stays put.
    pub fn reset_chips(&mut self) {
        self.state = self.state.reset_chips();
    }

    /// Returns the seat-scoped view of the table
    pub fn view(&self, seat: usize) -> PlayerView {
        self.state.view(seat)
    }

    /// Returns the banner for the last finished hand
    pub fn winner_message(&self) -> Option<String> {
        self.state.winner_message()
    }

    /// Install the next snapshot and forward its events to the sink.
    fn adopt(&mut self, transition: Transition) {
        for event in &transition.events {
            self.forward(event);
        }
        self.state = transition.state;
    }

    fn forward(&mut self, event: &HandEvent) {
        match event {
            HandEvent::HoleCardsDealt { seat, cards } => {
                self.sink.record_hole_cards(&HoleCardsRecord {
                    hand_id: self.hand_id.clone(),
                    seat: *seat,
                    cards: *cards,
                });
            }
            HandEvent::ActionTaken { seat, action, paid, stage } => {
                self.sink.record_action(&ActionRecord {
                    hand_id: self.hand_id.clone(),
                    seat: *seat,
                    action: *action,
                    paid: *paid,
                    stage: *stage,
                    ts: timestamp(),
                });
            }
            HandEvent::CommunityDealt { stage, cards } => {
                self.sink.record_community_cards(&CommunityCardsRecord {
                    hand_id: self.hand_id.clone(),
                    stage: *stage,
                    cards: cards.clone(),
                });
            }
            HandEvent::HandEnded { outcome } => {
                self.sink.end_hand(&HandEndRecord {
                    hand_id: self.hand_id.clone(),
                    winners: outcome.winners.seats(),
                    amount: outcome.pot,
                    category: outcome.category,
                    ts: timestamp(),
                });
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Stakes::default())
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("hand_seq", &self.hand_seq)
            .field("hand_id", &self.hand_id)
            .finish_non_exhaustive()
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
