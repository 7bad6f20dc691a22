use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{Card, Suit, Value};

/// An ordered sequence of cards to deal from.
///
/// A new deck holds all 52 cards; shuffling is left to the caller so that
/// seeded RNGs can produce reproducible deals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Deck {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Value::ALL.iter().map(move |&value| Card::new(value, suit)))
            .collect();
        Deck { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the next `n` cards off the top. Returns `None` without
    /// disturbing the deck if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            None
        } else {
            Some(self.cards.drain(..n).collect())
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Deck {
        Deck::new()
    }
}
