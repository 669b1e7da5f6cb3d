//! Game state: 13 piles over a fixed 52-slot card array, plus the foundation
//! bookkeeping (`red_min`/`black_min`/`rounds`/`found_count`) the move
//! generator and heuristic both depend on.
//!
//! Piles never store `Card`s directly; they store indices into
//! [`GameState`]'s owned `cards` array. A card's *slot* (its index) is fixed
//! for the life of a deal — only its rank/suit/face-up state at that slot
//! changes, mirroring the original engine's array-of-cards-plus-pointers
//! design translated into owned indices instead of raw pointers.

mod deal;
mod debug;
mod execution;
mod heuristics;
mod key;
pub mod moves;

pub use moves::Move;

use crate::card::Card;
use crate::pile::{Pile, PileId, PILE_COUNT};

#[derive(Debug, Clone)]
pub struct GameState {
    cards: [Card; 52],
    piles: [Pile; PILE_COUNT],
    /// Minimum rank present across the two red foundations, or -1 if either
    /// is empty. Paired with `black_min` for the safe-auto-send rule.
    red_min: i8,
    black_min: i8,
    /// Number of times the stock has been fully cycled through the waste.
    rounds: u32,
    found_count: u8,
}

impl GameState {
    pub fn cards(&self) -> &[Card; 52] {
        &self.cards
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    pub fn card_at(&self, slot: u8) -> Card {
        self.cards[slot as usize]
    }

    pub fn foundation_count(&self) -> u8 {
        self.found_count
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn red_min(&self) -> i8 {
        self.red_min
    }

    pub fn black_min(&self) -> i8 {
        self.black_min
    }

    pub fn is_won(&self) -> bool {
        self.found_count == 52
    }

    /// Top rank of a pile (-1 if empty), the unit the safe-send rule and move
    /// generator compare foundations and tableau tails against.
    pub(crate) fn top_rank(&self, id: PileId) -> i8 {
        match self.pile(id).top_card_index() {
            Some(slot) => self.card_at(slot).rank as i8,
            None => -1,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_face_down_for_test(&mut self, slot: u8) {
        self.cards[slot as usize].set_face_up(false);
    }
}
