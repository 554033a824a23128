//! Hand representation.

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// An ordered hand of cards.
///
/// Cards keep the order in which they were dealt or drawn; the opponent's
/// policy relies on that order when several cards are playable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the given card, preserving the order of the rest.
    ///
    /// Returns `None` if the card is not in the hand.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Counts the cards of the given suit.
    #[must_use]
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit == suit).count()
    }

    /// Returns the cards for which `is_playable` holds, in hand order.
    pub fn playable<'a, F>(&'a self, is_playable: F) -> impl Iterator<Item = Card> + 'a
    where
        F: Fn(&Card) -> bool + 'a,
    {
        self.cards.iter().copied().filter(move |c| is_playable(c))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
