//! Players and set scoring.

use alloc::string::String;

use crate::card::{Card, Rank};
use crate::error::MatchError;
use crate::hand::Hand;

/// A seated player: identity, hand, and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Ordinal ID, assigned in join order.
    id: u8,
    /// Display name.
    name: String,
    /// Cards currently held.
    hand: Hand,
    /// Completed sets turned in. Never decreases.
    points: u32,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            points: 0,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the number of sets turned in.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Adds a card to the player's hand.
    pub fn receive_card(&mut self, card: Card) {
        log::trace!("{} received {card}", self.name);
        self.hand.add_card(card);
    }

    /// Returns whether the player holds all four suits of `rank`.
    #[must_use]
    pub fn check_complete_set(&self, rank: Rank) -> bool {
        self.hand.is_complete(rank)
    }

    /// Turns in the complete set of `rank` for one point.
    ///
    /// The check and the removal happen together; nothing changes if the set
    /// is not complete.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::IncompleteSet`] if fewer than four suits of
    /// `rank` are held.
    pub fn resolve_match(&mut self, rank: Rank) -> Result<(), MatchError> {
        if !self.check_complete_set(rank) {
            return Err(MatchError::IncompleteSet);
        }

        self.hand
            .remove_rank(rank)
            .map_err(|_| MatchError::IncompleteSet)?;
        self.points += 1;
        Ok(())
    }
}
