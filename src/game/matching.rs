use crate::card::Rank;
use crate::error::{ActionError, MatchError};
use crate::result::MatchResult;

use super::{Game, GameState};

impl Game {
    /// Returns whether the current turn is at its match step.
    pub fn is_match_step(&self) -> bool {
        self.state() == GameState::CheckingMatch
    }

    /// Turns in the complete set of `rank` for one point and ends the turn.
    ///
    /// A turn allows one match attempt. The attempt is used up even when it
    /// is rejected, so the turn ends on [`MatchError::IncompleteSet`] too.
    /// The game ends here if the set was the last card in play.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game is over
    /// - The turn is not at its match step
    /// - It is not the player's turn
    /// - The player does not hold all four suits of `rank`
    pub fn attempt_match(&self, player_id: u8, rank: Rank) -> Result<MatchResult, MatchError> {
        let extra_turn_on_catch = self.options.extra_turn_on_catch;

        self.table.with(|table| {
            table.ensure_turn(player_id, GameState::CheckingMatch)?;

            let current = table.current;
            let player = &mut table.players[current];

            if let Err(err) = player.resolve_match(rank) {
                log::debug!("{} cannot turn in {rank}: {err}", player.name());
                table.finish_turn(extra_turn_on_catch);
                return Err(err);
            }

            let points = player.points();
            log::debug!("{} made a set of {rank}, points: {points}", player.name());
            table.finish_turn(extra_turn_on_catch);

            Ok(MatchResult {
                player_id,
                rank,
                points,
                game_over: table.state == GameState::GameOver,
            })
        })
    }

    /// Skips the match step and ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the turn is not at its match
    /// step, or it is not the player's turn.
    pub fn decline_match(&self, player_id: u8) -> Result<(), ActionError> {
        let extra_turn_on_catch = self.options.extra_turn_on_catch;

        self.table.with(|table| {
            table.ensure_turn(player_id, GameState::CheckingMatch)?;
            table.finish_turn(extra_turn_on_catch);
            Ok(())
        })
    }
}
