//! Human-readable dump of a position: each pile's cards followed by the
//! current admissible bound, gated behind the CLI's verbose mode. Ported
//! from `Solitaire::print`/`Pile::print` in the original engine.

use std::fmt;

use super::GameState;
use crate::pile::PileId;

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..13 {
            let id = PileId::from_index(i);
            write!(f, "{i:2}: ")?;
            for &slot in self.pile(id).cards() {
                let card = self.card_at(slot);
                write!(f, "{card} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "MinWinAt: {}", self.min_win_at())
    }
}

impl fmt::Display for crate::card::Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RANKS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
        const SUITS: [char; 4] = ['C', 'D', 'S', 'H'];
        let rank = RANKS[self.rank as usize];
        let suit = SUITS[self.suit as usize];
        if self.face_up {
            write!(f, "{rank}{suit}")
        } else {
            write!(f, "??")
        }
    }
}
