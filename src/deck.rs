//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit, SuitSet};
use crate::error::{DeckError, DrawError};
use crate::hand::Hand;

/// A stack of cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card deck and shuffles it with `rng`.
    #[must_use]
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck from the given cards, bottom first.
    ///
    /// The last card in `cards` is the first one drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if any card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = [SuitSet::new(); Rank::ALL.len()];

        for &card in &cards {
            let suits = &mut seen[usize::from(card.rank.value() - 1)];
            if !suits.insert(card.suit) {
                return Err(DeckError::DuplicateCard(card));
            }
        }

        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckEmpty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::DeckEmpty)
    }

    /// Deals `n` cards into `hand` and returns how many were dealt.
    ///
    /// Dealing is all-or-nothing: when fewer than `n` cards remain, nothing
    /// is dealt and `0` is returned.
    pub fn deal_into(&mut self, hand: &mut Hand, n: usize) -> usize {
        if n > self.cards.len() {
            log::trace!("deal of {n} skipped, {} cards left", self.cards.len());
            return 0;
        }

        let at = self.cards.len() - n;
        for card in self.cards.drain(at..).rev() {
            hand.add_card(card);
        }
        n
    }

    /// Returns the remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
