//! Outcome types returned by game actions.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::game::GameState;

/// Result of asking an opponent for a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The opponent handed over this many cards (1 to 4).
    Transferred(usize),
    /// The opponent had none of the rank.
    GoFish,
}

/// Result of a request turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who asked.
    pub player_id: u8,
    /// The player who was asked.
    pub opponent_id: u8,
    /// The rank asked for.
    pub rank: Rank,
    /// What the opponent did.
    pub outcome: RequestOutcome,
    /// The card drawn after a go fish, if the deck had one.
    pub drawn: Option<Card>,
    /// The game state after the request.
    pub state: GameState,
}

/// Result of a successful match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// The player who turned in the set.
    pub player_id: u8,
    /// The rank of the set.
    pub rank: Rank,
    /// The player's points after scoring.
    pub points: u32,
    /// Whether this set ended the game.
    pub game_over: bool,
}

/// Final score for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// Sets turned in.
    pub points: u32,
}

/// Final standings once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Scores for each player, in turn order.
    pub scores: Vec<PlayerScore>,
    /// IDs of every player with the highest score (more than one on a tie).
    pub winners: Vec<u8>,
}
