//! Core rules engine for single-deck, draw-one Klondike solitaire: dealing,
//! legal move generation, move application/undo, canonical state
//! fingerprinting, and an admissible move-count lower bound. This crate has
//! no search logic of its own — [`klondike-solver`] builds the IDA* search
//! on top of it.

pub mod card;
pub mod deck;
pub mod game_state;
pub mod pile;

pub use card::{Card, Color, Suit};
pub use deck::{parse, shuffled_deck, DeckError};
pub use game_state::{GameState, Move};
pub use pile::{Pile, PileId};
