//! A two-player Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck and both players and
//! drives the turn cycle: ask the opponent for a rank, go fish when they have
//! none, optionally turn in a completed set, and pass the turn on until the
//! deck and both hands are empty. Prompting and rendering are left to the
//! caller, which reads state through the copy-returning accessors.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions, GameState, Rank};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let alice = game.join("Alice").unwrap();
//! let _bob = game.join("Bob").unwrap();
//! game.start().unwrap();
//!
//! let turn = game.take_turn(alice, Rank::Seven).unwrap();
//! assert_eq!(turn.state, GameState::CheckingMatch);
//! game.decline_match(alice).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod request;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, SUITS_PER_RANK, Suit, SuitSet};
pub use deck::Deck;
pub use error::{
    ActionError, DeckError, DrawError, HandError, JoinError, MatchError, RankError, ScoreError,
    StartError,
};
pub use game::{Game, GameState, MAX_PLAYERS};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use request::{check_opponent_has, resolve_request};
pub use result::{GameResult, MatchResult, PlayerScore, RequestOutcome, TurnResult};
