use crate::card::Rank;
use crate::error::{ActionError, DrawError};
use crate::player::Player;
use crate::request::resolve_request;
use crate::result::{RequestOutcome, TurnResult};

use super::{Game, GameState, Table};

/// Borrows the players at `first` and `second` mutably at the same time.
fn pair_mut(players: &mut [Player], first: usize, second: usize) -> (&mut Player, &mut Player) {
    if first < second {
        let (left, right) = players.split_at_mut(second);
        (&mut left[first], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(first);
        (&mut right[0], &mut left[second])
    }
}

impl Table {
    pub(super) fn ensure_turn(
        &self,
        player_id: u8,
        expected: GameState,
    ) -> Result<(), ActionError> {
        if self.state == GameState::GameOver {
            return Err(ActionError::GameOver);
        }

        if self.state != expected {
            return Err(ActionError::InvalidState);
        }

        if self.current_id() != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }
}

impl Game {
    /// Asks the opponent for every card of `rank`.
    ///
    /// If the opponent holds the rank, the cards move to the asking player.
    /// Otherwise the player goes fish and draws one card; with an empty deck
    /// the draw is skipped. Either way the turn then moves to its match step,
    /// which must be closed with [`Game::attempt_match`] or
    /// [`Game::decline_match`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the game is not waiting for a
    /// request, or it is not the player's turn.
    pub fn take_turn(&self, player_id: u8, rank: Rank) -> Result<TurnResult, ActionError> {
        self.table.with(|table| {
            table.ensure_turn(player_id, GameState::AwaitingAction)?;

            let current = table.current;
            let opponent_index = table.opponent_index();
            let (requester, opponent) = pair_mut(&mut table.players, current, opponent_index);
            let opponent_id = opponent.id();

            let outcome = resolve_request(requester, opponent, rank);
            let drawn = match outcome {
                RequestOutcome::Transferred(_) => None,
                RequestOutcome::GoFish => match table.deck.draw() {
                    Ok(card) => {
                        log::debug!("go fish: {} draws a card", requester.name());
                        requester.receive_card(card);
                        Some(card)
                    }
                    Err(DrawError::DeckEmpty) => {
                        log::debug!("go fish: the deck is empty, nothing drawn");
                        None
                    }
                },
            };

            table.pending = Some(outcome);
            table.state = if table.is_game_over() {
                log::info!("game over");
                GameState::GameOver
            } else {
                GameState::CheckingMatch
            };

            Ok(TurnResult {
                player_id,
                opponent_id,
                rank,
                outcome,
                drawn,
                state: table.state,
            })
        })
    }
}
