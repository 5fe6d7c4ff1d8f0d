//! Game state types.

/// Game state.
///
/// Resolving a request and advancing the turn happen inside a single call,
/// so only the states that wait on a player are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for both players to join.
    WaitingForPlayers,
    /// Waiting for the current player to ask for a rank.
    AwaitingAction,
    /// The current player may turn in one set before the turn ends.
    CheckingMatch,
    /// The deck and every hand are empty; no further actions are accepted.
    GameOver,
}
