//! Card identity for Klondike: rank, suit, color, parity, and face-up state.
//!
//! Cards are process-lifetime: a full 52-card deck is built once (see
//! [`crate::deck`]) and mutated only through [`Card::set_face_up`] thereafter.
//! Identity is the derived [`Card::value`], stable across shuffles and flips.

use serde::{Deserialize, Serialize};

/// Suit, in the fixed internal ordering spec'd for `Card::value` and the
/// foundation-minima pairing in [`crate::game_state::execution`]: clubs,
/// diamonds, spades, hearts. `color() == suit as u8 & 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    pub fn from_index(index: u8) -> Option<Suit> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Hearts),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        if (self as u8) & 1 == 0 {
            Color::Black
        } else {
            Color::Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A single playing card. `rank` is 0-origin (Ace=0 .. King=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank <= 12);
        Card { rank, suit, face_up: false }
    }

    /// Stable derived identity: `suit * 13 + rank`, in `0..52`.
    pub fn value(self) -> u8 {
        (self.suit as u8) * 13 + self.rank
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }

    pub fn parity(self) -> u8 {
        self.rank & 1
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Builds a card from its derived value (inverse of [`Card::value`]).
    pub fn from_value(value: u8) -> Self {
        debug_assert!(value < 52);
        let suit = Suit::from_index(value / 13).expect("value < 52 implies suit index < 4");
        Card::new(value % 13, suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Suit::Clubs, Color::Black)]
    #[case(Suit::Diamonds, Color::Red)]
    #[case(Suit::Spades, Color::Black)]
    #[case(Suit::Hearts, Color::Red)]
    fn suit_color(#[case] suit: Suit, #[case] expected: Color) {
        assert_eq!(suit.color(), expected);
    }

    #[rstest]
    #[case(0, Suit::Clubs, 0)]
    #[case(12, Suit::Clubs, 12)]
    #[case(0, Suit::Hearts, 39)]
    #[case(12, Suit::Hearts, 51)]
    fn value_is_suit_times_13_plus_rank(#[case] rank: u8, #[case] suit: Suit, #[case] expected: u8) {
        assert_eq!(Card::new(rank, suit).value(), expected);
    }

    #[test]
    fn value_round_trips_through_from_value() {
        for v in 0..52u8 {
            assert_eq!(Card::from_value(v).value(), v);
        }
    }

    #[test]
    fn parity_is_rank_parity() {
        assert_eq!(Card::new(0, Suit::Clubs).parity(), 0);
        assert_eq!(Card::new(1, Suit::Clubs).parity(), 1);
        assert_eq!(Card::new(12, Suit::Clubs).parity(), 0);
    }
}
