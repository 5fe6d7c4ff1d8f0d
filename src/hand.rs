//! Player hand representation.
//!
//! A hand maps each rank to the suits held for it. A rank with no suits is
//! never stored, so the number of entries is the number of distinct ranks
//! held and an empty map means an empty hand.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, SuitSet};
use crate::error::HandError;

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Suits held per rank. Never contains an empty set.
    ranks: HashMap<Rank, SuitSet>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranks: HashMap::new(),
        }
    }

    /// Adds a card to the hand.
    ///
    /// # Panics
    ///
    /// Panics if the card is already in the hand. Every card lives in exactly
    /// one place, so this only happens if that bookkeeping is broken.
    pub fn add_card(&mut self, card: Card) {
        let inserted = self.ranks.entry(card.rank).or_default().insert(card.suit);
        assert!(inserted, "{card} is already in this hand");
    }

    /// Removes every card of `rank` and returns the suits that were held.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::RankAbsent`] if the hand holds no cards of `rank`.
    pub fn remove_rank(&mut self, rank: Rank) -> Result<SuitSet, HandError> {
        self.ranks.remove(&rank).ok_or(HandError::RankAbsent)
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.ranks.contains_key(&rank)
    }

    /// Returns how many suits of `rank` are held (0 if none).
    #[must_use]
    pub fn suit_count(&self, rank: Rank) -> usize {
        self.suits(rank).len()
    }

    /// Returns the suits held for `rank`.
    #[must_use]
    pub fn suits(&self, rank: Rank) -> SuitSet {
        self.ranks.get(&rank).copied().unwrap_or_default()
    }

    /// Returns whether all four suits of `rank` are held.
    #[must_use]
    pub fn is_complete(&self, rank: Rank) -> bool {
        self.suits(rank).is_full()
    }

    /// Returns every rank for which all four suits are held, ascending.
    #[must_use]
    pub fn complete_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self
            .ranks
            .iter()
            .filter(|(_, suits)| suits.is_full())
            .map(|(rank, _)| *rank)
            .collect();
        ranks.sort_unstable();
        ranks
    }

    /// Returns the held ranks and their suits, ordered by rank.
    #[must_use]
    pub fn ranks(&self) -> Vec<(Rank, SuitSet)> {
        let mut ranks: Vec<(Rank, SuitSet)> = self
            .ranks
            .iter()
            .map(|(rank, suits)| (*rank, *suits))
            .collect();
        ranks.sort_unstable_by_key(|(rank, _)| *rank);
        ranks
    }

    /// Returns the cards in the hand, ordered by rank and then suit.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.ranks()
            .into_iter()
            .flat_map(|(rank, suits)| suits.iter().map(move |suit| Card::new(suit, rank)))
            .collect()
    }

    /// Returns the number of distinct ranks held.
    #[must_use]
    pub fn rank_count(&self) -> usize {
        self.ranks.len()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.values().map(SuitSet::len).sum()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
