//! Pile identifiers and the single `Pile` type shared by all 13 piles.
//!
//! Klondike's layout is uniform enough (unlike FreeCell's tableau / freecells /
//! foundations three-shaped layout) that one `Pile` type, parameterized only by
//! its `PileId`, covers the waste, the seven tableau columns, the stock, and the
//! four foundations. Piles hold `u8` indices into the `GameState`'s owned
//! `[Card; 52]` deck array rather than the cards themselves, so cloning a pile
//! (needed constantly during search) never clones card data.

use serde::{Deserialize, Serialize};

/// Fixed numeric ordering of the 13 piles, per the canonical key encoding and
/// the foundation-minima pairing in [`crate::game_state::execution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PileId {
    Waste = 0,
    Tableau1 = 1,
    Tableau2 = 2,
    Tableau3 = 3,
    Tableau4 = 4,
    Tableau5 = 5,
    Tableau6 = 6,
    Tableau7 = 7,
    Stock = 8,
    Foundation1 = 9,
    Foundation2 = 10,
    Foundation3 = 11,
    Foundation4 = 12,
}

pub const PILE_COUNT: usize = 13;
pub const TABLEAU_COUNT: usize = 7;

impl PileId {
    pub const TABLEAU: [PileId; 7] = [
        PileId::Tableau1,
        PileId::Tableau2,
        PileId::Tableau3,
        PileId::Tableau4,
        PileId::Tableau5,
        PileId::Tableau6,
        PileId::Tableau7,
    ];
    pub const FOUNDATION: [PileId; 4] = [
        PileId::Foundation1,
        PileId::Foundation2,
        PileId::Foundation3,
        PileId::Foundation4,
    ];

    pub fn index(self) -> usize {
        self as u8 as usize
    }

    pub fn from_index(index: usize) -> PileId {
        match index {
            0 => PileId::Waste,
            1 => PileId::Tableau1,
            2 => PileId::Tableau2,
            3 => PileId::Tableau3,
            4 => PileId::Tableau4,
            5 => PileId::Tableau5,
            6 => PileId::Tableau6,
            7 => PileId::Tableau7,
            8 => PileId::Stock,
            9 => PileId::Foundation1,
            10 => PileId::Foundation2,
            11 => PileId::Foundation3,
            12 => PileId::Foundation4,
            _ => panic!("pile index {index} out of range 0..13"),
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self.index(), 1..=7)
    }

    pub fn is_foundation(self) -> bool {
        matches!(self.index(), 9..=12)
    }

    /// For a foundation pile, the suit index it exclusively holds (`index - 9`).
    pub fn foundation_suit(self) -> Option<u8> {
        self.is_foundation().then(|| (self.index() - 9) as u8)
    }

    pub fn tableau_number(self) -> Option<u8> {
        self.is_tableau().then(|| self.index() as u8)
    }
}

/// One pile: an ordered sequence of card indices plus the index of the
/// bottom-most face-up card (`top`, `None` meaning "no face-up card").
///
/// Invariant: every card at `cards[top..]` is face-up, every card at
/// `cards[..top]` is face-down; `top` is `None` iff the pile is empty or
/// entirely face-down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pile {
    cards: Vec<u8>,
    top: Option<u16>,
}

impl Pile {
    pub fn new() -> Self {
        Pile { cards: Vec::new(), top: None }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the bottom-most face-up card, or `None` if there is none.
    pub fn top(&self) -> Option<usize> {
        self.top.map(|t| t as usize)
    }

    pub fn cards(&self) -> &[u8] {
        &self.cards
    }

    /// Appends `card_idx` face-down.
    pub fn add(&mut self, card_idx: u8) {
        self.cards.push(card_idx);
    }

    /// Returns the card index at the bottom of the pile (position 0), or
    /// `None` if empty. Used for canonical-key sorting (`highValue`).
    pub fn high_value_index(&self) -> Option<u8> {
        self.cards.first().copied()
    }

    /// Index of the topmost card (last position), or `None` if empty.
    pub fn top_card_index(&self) -> Option<u8> {
        self.cards.last().copied()
    }

    /// Count of face-up cards; 0 if none.
    pub fn face_up_count(&self) -> usize {
        match self.top {
            Some(t) => self.cards.len() - t as usize,
            None => 0,
        }
    }

    /// Toggles face-up state of the top card, maintaining `top`.
    /// Returns the flipped card index, or `None` if the pile is empty.
    /// `flip_to` reports the new face-up state so callers can update the
    /// shared `Card` array without re-deriving it.
    pub fn flip(&mut self) -> Option<(u8, bool)> {
        let last = *self.cards.last()?;
        let now_up = self.top != Some((self.cards.len() - 1) as u16);
        self.top = if now_up { Some((self.cards.len() - 1) as u16) } else { None };
        Some((last, now_up))
    }

    /// Detaches the top `n` face-up cards onto `dest`, preserving order.
    pub fn remove_n(&mut self, dest: &mut Pile, n: usize) {
        debug_assert!(n <= self.cards.len());
        if dest.top.is_none() {
            dest.top = Some(dest.cards.len() as u16);
        }
        let start = self.cards.len() - n;
        dest.cards.extend_from_slice(&self.cards[start..]);
        self.cards.truncate(start);
        if let Some(t) = self.top {
            if (t as usize) >= self.cards.len() {
                self.top = None;
            }
        }
    }

    /// Detaches the single top card onto `dest`.
    pub fn remove_one(&mut self, dest: &mut Pile) {
        self.remove_n(dest, 1);
    }

    /// Talon draw: moves `count` cards' worth of draw distance from `self`
    /// (stock) towards `dest` (waste). If `self` doesn't hold enough cards
    /// (or holds exactly `count` and `thru` forces a recycle anyway), this
    /// first pours cards from `dest` back onto `self` — just enough that
    /// `dest` is left exposing the card `count` draws away, consolidating the
    /// rest into `self` in the correct order for subsequent single draws.
    /// Returns `(recycled, flipped)`: whether a pour happened, and every card
    /// index whose face-up state flipped, in the order flipped — callers
    /// toggle (not set) each one, since the same routine runs in both the
    /// forward (stock -> waste) and undo (waste -> stock) directions.
    pub fn remove_top_talon(&mut self, dest: &mut Pile, count: usize, thru: bool) -> (bool, Vec<u8>) {
        let mut flipped = Vec::with_capacity(count);
        if self.cards.len() > count || (self.cards.len() == count && !thru) {
            let floor = self.cards.len() - count;
            loop {
                let idx = self.cards.pop().expect("floor < current len");
                flipped.push(idx);
                dest.cards.push(idx);
                if self.cards.len() <= floor {
                    break;
                }
            }
            return (false, flipped);
        }
        let mut pour = dest.cards.len() + self.cards.len() - count;
        loop {
            let idx = dest.cards.pop().expect("pour computed from dest+self len");
            flipped.push(idx);
            self.cards.push(idx);
            pour -= 1;
            if pour == 0 {
                break;
            }
        }
        (true, flipped)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.top = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_sets_and_clears_top() {
        let mut p = Pile::new();
        p.add(5);
        p.add(7);
        assert_eq!(p.top(), None);
        let (idx, up) = p.flip().unwrap();
        assert_eq!(idx, 7);
        assert!(up);
        assert_eq!(p.top(), Some(1));
        let (idx2, up2) = p.flip().unwrap();
        assert_eq!(idx2, 7);
        assert!(!up2);
        assert_eq!(p.top(), None);
    }

    #[test]
    fn remove_n_transfers_preserving_order_and_top() {
        let mut src = Pile::new();
        for i in 0..5u8 {
            src.add(i);
        }
        src.flip(); // flips card 4, top = Some(4)
        // manually widen the face-up run to simulate a 3-card run
        src.top = Some(2);
        let mut dst = Pile::new();
        src.remove_n(&mut dst, 3);
        assert_eq!(dst.cards(), &[2, 3, 4]);
        assert_eq!(src.cards(), &[0, 1]);
        assert_eq!(src.top(), None);
    }

    #[test]
    fn talon_draw_without_recycle() {
        let mut stock = Pile::new();
        for i in 0..10u8 {
            stock.add(i);
        }
        let mut waste = Pile::new();
        let (recycled, flipped) = stock.remove_top_talon(&mut waste, 3, false);
        assert!(!recycled);
        assert_eq!(stock.len(), 7);
        assert_eq!(waste.cards(), &[9, 8, 7]);
        assert_eq!(flipped, vec![9, 8, 7]);
    }

    #[test]
    fn talon_draw_recycles_and_exposes_target_card() {
        // stock = [0,1] (top=1), waste = [2,3,4,5,6] (top=6, oldest=2).
        // Drawing 3 (stock_len=2, thru=false) should recycle, leaving waste
        // exposing original waste position 0 (card index 2) as its sole card.
        let mut stock = Pile::new();
        stock.add(0);
        stock.add(1);
        let mut waste = Pile::new();
        for i in 2..7u8 {
            waste.add(i);
        }
        let (recycled, _flipped) = stock.remove_top_talon(&mut waste, 3, false);
        assert!(recycled);
        assert_eq!(waste.cards(), &[2]);
        assert_eq!(stock.len(), 6);
    }

    #[test]
    fn high_value_index_is_bottom_card() {
        let mut p = Pile::new();
        assert_eq!(p.high_value_index(), None);
        p.add(3);
        p.add(9);
        assert_eq!(p.high_value_index(), Some(3));
    }
}
