//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{JoinError, ScoreError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameResult, PlayerScore, RequestOutcome};

mod matching;
mod setup;
pub mod state;
mod turn;

pub use state::GameState;

/// Number of seats at the table.
pub const MAX_PLAYERS: usize = 2;

/// Everything a turn mutates, kept behind one lock.
#[derive(Debug)]
struct Table {
    /// Cards not yet drawn.
    deck: Deck,
    /// Seated players in turn order. A player's ID is its index.
    players: Vec<Player>,
    /// Current game state.
    state: GameState,
    /// Index of the player whose turn it is.
    current: usize,
    /// Outcome of the request awaiting its match step.
    pending: Option<RequestOutcome>,
}

impl Table {
    fn is_game_over(&self) -> bool {
        self.deck.is_empty() && self.players.iter().all(|player| player.hand().is_empty())
    }

    fn opponent_index(&self) -> usize {
        (self.current + 1) % self.players.len()
    }

    fn current_id(&self) -> Option<u8> {
        match self.state {
            GameState::AwaitingAction | GameState::CheckingMatch => {
                self.players.get(self.current).map(Player::id)
            }
            GameState::WaitingForPlayers | GameState::GameOver => None,
        }
    }

    fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.get(usize::from(player_id))
    }

    /// Moves the turn to the next player, wrapping after the last.
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        log::debug!("turn passes to {}", self.players[self.current].name());
    }

    /// Closes the match step and hands the turn on, or ends the game.
    fn finish_turn(&mut self, extra_turn_on_catch: bool) {
        let caught = matches!(self.pending.take(), Some(RequestOutcome::Transferred(_)));

        if self.is_game_over() {
            self.state = GameState::GameOver;
            log::info!("game over");
            return;
        }

        if !(extra_turn_on_catch && caught) {
            self.advance_turn();
        }
        self.state = GameState::AwaitingAction;
    }
}

/// A two-player Go Fish game that manages the deck, hands, and turn order.
///
/// All mutable state sits behind a single lock, and each method applies its
/// whole step while holding it, so a game can be shared between threads.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_deck(options, Deck::new_shuffled(&mut rng))
    }

    /// Creates a new game that draws from the given deck.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            table: Mutex::new(Table {
                deck,
                players: Vec::new(),
                state: GameState::WaitingForPlayers,
                current: 0,
                pending: None,
            }),
        }
    }

    /// Takes a seat at the table.
    ///
    /// Returns the assigned player ID. IDs follow join order, and the first
    /// player to join moves first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started or both seats are
    /// taken.
    pub fn join(&self, name: impl Into<String>) -> Result<u8, JoinError> {
        let name = name.into();
        self.table.with(|table| {
            if table.state != GameState::WaitingForPlayers {
                return Err(JoinError::InvalidState);
            }
            if table.players.len() >= MAX_PLAYERS {
                return Err(JoinError::TableFull);
            }

            let id = table.players.len() as u8;
            log::info!("player {id} ({name}) joined");
            table.players.push(Player::new(id, name));
            Ok(id)
        })
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.with(|table| table.players.len())
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.table.with(|table| table.deck.len())
    }

    /// Returns the remaining deck, bottom to top.
    pub fn deck_cards(&self) -> Vec<Card> {
        self.table.with(|table| table.deck.cards().to_vec())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.table.with(|table| table.state)
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` before the game starts and after it ends.
    pub fn current_player(&self) -> Option<u8> {
        self.table.with(|table| table.current_id())
    }

    /// Returns the player ID of the current player's opponent.
    ///
    /// Returns `None` whenever [`Game::current_player`] does.
    pub fn opponent(&self) -> Option<u8> {
        self.table.with(|table| {
            table.current_id()?;
            table.players.get(table.opponent_index()).map(Player::id)
        })
    }

    /// Returns a copy of the player's hand.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn get_hand(&self, player_id: u8) -> Option<Hand> {
        self.table
            .with(|table| table.player(player_id).map(|player| player.hand().clone()))
    }

    /// Returns the player's points.
    pub fn get_points(&self, player_id: u8) -> Option<u32> {
        self.table
            .with(|table| table.player(player_id).map(Player::points))
    }

    /// Returns a copy of the player.
    pub fn get_player(&self, player_id: u8) -> Option<Player> {
        self.table.with(|table| table.player(player_id).cloned())
    }

    /// Returns copies of all players in turn order.
    pub fn players(&self) -> Vec<Player> {
        self.table.with(|table| table.players.clone())
    }

    /// Returns whether the deck and every hand are empty.
    ///
    /// Always `false` before the game has started.
    pub fn is_game_over(&self) -> bool {
        self.table
            .with(|table| table.state != GameState::WaitingForPlayers && table.is_game_over())
    }

    /// Returns the final scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not over.
    pub fn results(&self) -> Result<GameResult, ScoreError> {
        self.table.with(|table| {
            if table.state != GameState::GameOver {
                return Err(ScoreError::GameNotOver);
            }

            let scores: Vec<PlayerScore> = table
                .players
                .iter()
                .map(|player| PlayerScore {
                    player_id: player.id(),
                    name: String::from(player.name()),
                    points: player.points(),
                })
                .collect();

            let best = scores.iter().map(|score| score.points).max().unwrap_or(0);
            let winners = scores
                .iter()
                .filter(|score| score.points == best)
                .map(|score| score.player_id)
                .collect();

            Ok(GameResult { scores, winners })
        })
    }
}
