use core::fmt;
use std::fmt::Display;

use thiserror::Error;

/// Card values from two to ace, ordered by hold'em strength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Value {
    /// Every value, lowest first. Useful for building decks.
    pub const ALL: [Value; 13] = [
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// The single-character code used in card strings ("T" for ten).
    pub const fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' | 't' => Some(Value::Ten),
            'J' | 'j' => Some(Value::Jack),
            'Q' | 'q' => Some(Value::Queen),
            'K' | 'k' => Some(Value::King),
            'A' | 'a' => Some(Value::Ace),
            _ => None,
        }
    }
}

/// The four suits. Ordering is arbitrary; suits never break ties.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' | 'C' => Some(Suit::Club),
            'd' | 'D' => Some(Suit::Diamond),
            'h' | 'H' => Some(Suit::Heart),
            's' | 'S' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// Errors from parsing a two-character card string.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseCardError {
    #[error("card strings are two characters, got {0:?}")]
    WrongLength(String),
    #[error("unknown card value {0:?}")]
    UnknownValue(char),
    #[error("unknown card suit {0:?}")]
    UnknownSuit(char),
}

/// A single playing card.
///
/// Cards render and parse as the usual two-character code, value then
/// suit: `"As"`, `"Td"`, `"2c"`. The same encoding is used byte-for-byte
/// at the cross-process wire boundary.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Card {
        Card { value, suit }
    }

    /// The two-byte wire encoding: rank character then suit character.
    pub fn wire_code(self) -> [u8; 2] {
        [self.value.to_char() as u8, self.suit.to_char() as u8]
    }

    /// Decode the two-byte wire encoding. Returns `None` for anything
    /// that isn't a card, including the hidden-card sentinel.
    pub fn from_wire_code(code: [u8; 2]) -> Option<Card> {
        let value = Value::from_char(code[0] as char)?;
        let suit = Suit::from_char(code[1] as char)?;
        Some(Card { value, suit })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = ParseCardError;

    fn try_from(s: &str) -> Result<Card, ParseCardError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(su), None) => {
                let value = Value::from_char(v).ok_or(ParseCardError::UnknownValue(v))?;
                let suit = Suit::from_char(su).ok_or(ParseCardError::UnknownSuit(su))?;
                Ok(Card { value, suit })
            }
            _ => Err(ParseCardError::WrongLength(s.to_string())),
        }
    }
}
