//! Card primitives shared by the betting engine: card values and suits,
//! an ordered 52-card deck, and the hand-ranking used at showdown.
mod card;
mod deck;
mod rank;

pub use card::{Card, ParseCardError, Suit, Value};
pub use deck::Deck;
pub use rank::{rank_cards, Rank};
