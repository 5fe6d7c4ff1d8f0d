//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckEmpty,
}

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card was given more than once.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur when removing cards from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards of the requested rank.
    #[error("no cards of that rank in hand")]
    RankAbsent,
}

/// Errors that can occur when converting a number into a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// The value is not between 1 and 13.
    #[error("rank {0} is outside 1..=13")]
    OutOfRange(u8),
}

/// Errors that can occur when a player tries to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("invalid game state for joining")]
    InvalidState,
    /// Both seats are already taken.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Invalid game state for starting.
    #[error("invalid game state for starting")]
    InvalidState,
    /// Fewer than two players have joined.
    #[error("not enough players")]
    NotEnoughPlayers,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during a request turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
}

/// Errors that can occur when turning in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Invalid game state for a match attempt.
    #[error("invalid game state for a match attempt")]
    InvalidState,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player does not hold all four suits of the rank.
    #[error("not all suits of that rank are held")]
    IncompleteSet,
}

impl From<ActionError> for MatchError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::InvalidState => Self::InvalidState,
            ActionError::GameOver => Self::GameOver,
            ActionError::NotYourTurn => Self::NotYourTurn,
        }
    }
}

/// Errors that can occur when reading final scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The game has not finished yet.
    #[error("the game is not over")]
    GameNotOver,
}
