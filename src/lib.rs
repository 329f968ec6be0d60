//! headsup-holdem: heads-up Texas Hold'em engine
//!
//! Goals:
//! - Pure, immutable game state; every transition returns a new snapshot
//! - Deterministic evaluation and dealing (seedable shuffles for replay)
//! - No panics for invalid input; use `Result` for recoverable errors
//! - Zero I/O in the core; hand progress streams to an injected [`log::LogSink`]
//!
//! ## Quick start: play a hand
//! ```
//! use headsup_holdem::game::Game;
//! use headsup_holdem::state::{Action, Stage, Stakes};
//!
//! let mut game = Game::new(Stakes::default());
//! game.set_seed(42); // same seed, same deal
//! game.start_hand().unwrap();
//!
//! // Dealer posts the small blind and acts first before the flop.
//! assert_eq!(game.state().turn(), game.state().dealer());
//! assert_eq!(game.state().pot(), 30);
//!
//! game.apply(Action::Call).unwrap();
//! game.apply(Action::Check).unwrap();
//! assert_eq!(game.state().stage(), Stage::Flop);
//! ```
//!
//! ## Quick start: evaluate seven cards
//! ```
//! use headsup_holdem::evaluator::{evaluate_holdem, Category};
//! use headsup_holdem::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//!
//! let eval = evaluate_holdem(&hole, &board).unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod log;
pub mod state;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
