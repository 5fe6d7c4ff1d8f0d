use crate::error::StartError;

use super::{Game, GameState, MAX_PLAYERS};

impl Game {
    /// Deals the opening hands and gives the first turn to player 0.
    ///
    /// Each player receives [`GameOptions::hand_size`](crate::GameOptions::hand_size)
    /// cards, in join order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started, fewer than two
    /// players have joined, or the deck cannot cover the opening deal.
    pub fn start(&self) -> Result<(), StartError> {
        let hand_size = usize::from(self.options.hand_size);

        self.table.with(|table| {
            if table.state != GameState::WaitingForPlayers {
                return Err(StartError::InvalidState);
            }

            if table.players.len() < MAX_PLAYERS {
                return Err(StartError::NotEnoughPlayers);
            }

            if table.deck.len() < hand_size * table.players.len() {
                return Err(StartError::NotEnoughCards);
            }

            for player in &mut table.players {
                table.deck.deal_into(player.hand_mut(), hand_size);
                log::trace!("dealt {hand_size} cards to {}", player.name());
            }

            table.current = 0;
            table.pending = None;
            table.state = if table.is_game_over() {
                GameState::GameOver
            } else {
                GameState::AwaitingAction
            };

            log::info!(
                "game started with {} cards left in the deck",
                table.deck.len()
            );

            Ok(())
        })
    }
}
