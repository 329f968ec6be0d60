use crate::cards::Card;
use crate::evaluator::Category;
use crate::state::{Action, Stage};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-seat summary captured as a hand starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub seat: usize,
    pub name: String,
    /// Stack size before the blinds were posted.
    pub chips: u64,
}

/// Emitted once per hand, before any chips move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandStartRecord {
    /// Unique hand identifier (format: YYYYMMDD-NNNNNN).
    pub hand_id: String,
    pub players: Vec<PlayerSummary>,
    /// RNG seed used to shuffle this hand's deck; replaying it reproduces
    /// the deal.
    pub seed: u64,
    /// RFC3339 timestamp.
    pub ts: String,
}

/// One seat's two hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCardsRecord {
    pub hand_id: String,
    pub seat: usize,
    pub cards: [Card; 2],
}

/// Community cards dealt as a street opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCardsRecord {
    pub hand_id: String,
    pub stage: Stage,
    pub cards: Vec<Card>,
}

/// A single betting action and the chips it actually moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub hand_id: String,
    pub seat: usize,
    /// The action as submitted; a raise carries its total street commitment.
    pub action: Action,
    /// Chips paid by this action. A stack-capped call pays less than owed;
    /// a check or fold pays zero.
    pub paid: u64,
    pub stage: Stage,
    /// RFC3339 timestamp.
    pub ts: String,
}

/// Emitted once when the hand finishes, whether by fold or showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEndRecord {
    pub hand_id: String,
    /// Winning seat indices; both seats on a split pot.
    pub winners: Vec<usize>,
    /// Chips paid out of the pot.
    pub amount: u64,
    /// Winning hand category; absent when the pot was won on a fold.
    #[serde(default)]
    pub category: Option<Category>,
    /// RFC3339 timestamp.
    pub ts: String,
}

/// Fire-and-forget observer for hand progress.
///
/// The machine pushes records outward and never reads anything back, so
/// the table cannot be influenced (or blocked) by its own logging. Every
/// method defaults to a no-op; sinks implement only what they care about.
pub trait LogSink {
    fn start_hand(&mut self, record: &HandStartRecord) {
        let _ = record;
    }

    fn record_hole_cards(&mut self, record: &HoleCardsRecord) {
        let _ = record;
    }

    fn record_community_cards(&mut self, record: &CommunityCardsRecord) {
        let _ = record;
    }

    fn record_action(&mut self, record: &ActionRecord) {
        let _ = record;
    }

    fn end_hand(&mut self, record: &HandEndRecord) {
        let _ = record;
    }
}

/// Sharing a sink keeps it inspectable after the game takes ownership of
/// the boxed handle.
impl<S: LogSink + ?Sized> LogSink for Rc<RefCell<S>> {
    fn start_hand(&mut self, record: &HandStartRecord) {
        self.borrow_mut().start_hand(record);
    }

    fn record_hole_cards(&mut self, record: &HoleCardsRecord) {
        self.borrow_mut().record_hole_cards(record);
    }

    fn record_community_cards(&mut self, record: &CommunityCardsRecord) {
        self.borrow_mut().record_community_cards(record);
    }

    fn record_action(&mut self, record: &ActionRecord) {
        self.borrow_mut().record_action(record);
    }

    fn end_hand(&mut self, record: &HandEndRecord) {
        self.borrow_mut().end_hand(record);
    }
}

/// Sink that drops every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {}

/// Any record a sink can receive, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogRecord {
    HandStart(HandStartRecord),
    HoleCards(HoleCardsRecord),
    CommunityCards(CommunityCardsRecord),
    Action(ActionRecord),
    HandEnd(HandEndRecord),
}

/// Sink that keeps every record in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Vec<LogRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record received so far, in order
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Dumps the collected records as JSON lines.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl LogSink for MemorySink {
    fn start_hand(&mut self, record: &HandStartRecord) {
        self.records.push(LogRecord::HandStart(record.clone()));
    }

    fn record_hole_cards(&mut self, record: &HoleCardsRecord) {
        self.records.push(LogRecord::HoleCards(record.clone()));
    }

    fn record_community_cards(&mut self, record: &CommunityCardsRecord) {
        self.records.push(LogRecord::CommunityCards(record.clone()));
    }

    fn record_action(&mut self, record: &ActionRecord) {
        self.records.push(LogRecord::Action(record.clone()));
    }

    fn end_hand(&mut self, record: &HandEndRecord) {
        self.records.push(LogRecord::HandEnd(record.clone()));
    }
}
