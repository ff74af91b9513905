//! holdem-rs: Texas Hold'em simulation library
//!
//! Goals:
//! - Deterministic 7-card hand evaluation with a strict total order
//! - A betting-round state machine that never sees invalid actions
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate seven cards
//! ```
//! use holdem_rs::cards::{Card, Rank, Suit};
//! use holdem_rs::evaluator::{evaluate_seven, Category};
//!
//! let seven = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Clubs),
//! ];
//! let eval = evaluate_seven(&seven);
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## Console game
//! Run the interactive console game with:
//! ```sh
//! cargo run --bin holdem
//! ```

pub mod agents;
pub mod betting;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
