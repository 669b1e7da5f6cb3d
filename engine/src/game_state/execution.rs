//! Applying and undoing moves, plus the foundation-minima bookkeeping
//! (`red_min`/`black_min`) the safe-auto-send rule in [`super::moves`] reads.

use super::{GameState, Move};
use crate::pile::PileId;

impl GameState {
    /// Applies `mv`, returning whether a stock/waste recycle ("redeal")
    /// happened — undo needs this to reverse the talon draw exactly.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let mut thru = false;
        if mv.from != mv.to {
            if mv.draw > 0 {
                thru = self.draw_talon(mv.draw as usize, false);
            }
            if mv.cards == 1 {
                self.transfer_one(mv.from, mv.to);
                if mv.to.is_foundation() {
                    self.found_count += 1;
                    self.update_foundation_minima();
                } else if mv.from.is_foundation() {
                    self.found_count -= 1;
                    self.update_foundation_minima();
                }
            } else {
                self.transfer_n(mv.from, mv.to, mv.cards as usize);
            }
        } else {
            self.flip_pile(mv.from);
        }
        thru
    }

    /// Exact inverse of [`GameState::make_move`]; `thru` must be the value it
    /// returned.
    pub fn undo_move(&mut self, mv: Move, thru: bool) {
        if mv.from != mv.to {
            if mv.cards == 1 {
                self.transfer_one(mv.to, mv.from);
                if mv.to.is_foundation() {
                    self.found_count -= 1;
                    self.update_foundation_minima();
                } else if mv.from.is_foundation() {
                    self.found_count += 1;
                    self.update_foundation_minima();
                }
            } else {
                self.transfer_n(mv.to, mv.from, mv.cards as usize);
            }
            if mv.draw > 0 {
                let recycled = self.draw_talon_undo(mv.draw as usize, thru);
                debug_assert_eq!(recycled, thru);
            }
        } else {
            self.flip_pile(mv.to);
        }
    }

    /// Applies a chain of moves root-to-leaf, as the search driver replays a
    /// path from the initial deal down to a frontier node.
    pub fn make_move_chain(&mut self, chain: &[Move]) {
        for &mv in chain {
            self.make_move(mv);
        }
    }

    fn update_foundation_minima(&mut self) {
        let diamonds = self.top_rank(PileId::Foundation2);
        let hearts = self.top_rank(PileId::Foundation4);
        self.red_min = diamonds.min(hearts);
        let clubs = self.top_rank(PileId::Foundation1);
        let spades = self.top_rank(PileId::Foundation3);
        self.black_min = clubs.min(spades);
    }

    fn transfer_one(&mut self, from: PileId, to: PileId) {
        let (src, dst) = self.pile_pair_mut(from, to);
        src.remove_one(dst);
    }

    fn transfer_n(&mut self, from: PileId, to: PileId, n: usize) {
        let (src, dst) = self.pile_pair_mut(from, to);
        src.remove_n(dst, n);
    }

    fn flip_pile(&mut self, id: PileId) {
        if let Some((slot, up)) = self.piles[id.index()].flip() {
            self.cards[slot as usize].set_face_up(up);
        }
    }

    fn draw_talon(&mut self, count: usize, thru: bool) -> bool {
        let (stock, waste) = self.pile_pair_mut(PileId::Stock, PileId::Waste);
        let (recycled, flipped) = stock.remove_top_talon(waste, count, thru);
        for slot in flipped {
            self.cards[slot as usize].face_up = !self.cards[slot as usize].face_up;
        }
        if recycled {
            self.rounds += 1;
        }
        recycled
    }

    fn draw_talon_undo(&mut self, count: usize, thru: bool) -> bool {
        let (waste, stock) = self.pile_pair_mut(PileId::Waste, PileId::Stock);
        let (recycled, flipped) = waste.remove_top_talon(stock, count, thru);
        for slot in flipped {
            self.cards[slot as usize].face_up = !self.cards[slot as usize].face_up;
        }
        if recycled {
            self.rounds -= 1;
        }
        recycled
    }

    fn pile_pair_mut(&mut self, a: PileId, b: PileId) -> (&mut crate::pile::Pile, &mut crate::pile::Pile) {
        debug_assert_ne!(a, b);
        let (ai, bi) = (a.index(), b.index());
        if ai < bi {
            let (left, right) = self.piles.split_at_mut(bi);
            (&mut left[ai], &mut right[0])
        } else {
            let (left, right) = self.piles.split_at_mut(ai);
            (&mut right[0], &mut left[bi])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn ordered_deck() -> [Card; 52] {
        std::array::from_fn(|i| Card::from_value(i as u8))
    }

    #[test]
    fn flip_move_toggles_face_up_state() {
        let mut state = GameState::new_dealt(ordered_deck());
        let slot = state.pile(PileId::Tableau3).top_card_index().unwrap();
        state.set_face_down_for_test(slot);
        assert!(!state.card_at(slot).face_up);
        state.make_move(Move { from: PileId::Tableau3, to: PileId::Tableau3, cards: 0, draw: 0 });
        assert!(state.card_at(slot).face_up);
    }

    #[test]
    fn single_card_move_to_foundation_updates_count_and_minima() {
        // Build a trivial deck where tableau1's only card is the Ace of Clubs.
        let mut deck = ordered_deck();
        deck.swap(0, 0);
        let mut state = GameState::new_dealt(deck);
        let ace_clubs_slot = state.pile(PileId::Tableau1).top_card_index().unwrap();
        assert_eq!(state.card_at(ace_clubs_slot).rank, 0);
        let mv = Move { from: PileId::Tableau1, to: PileId::Foundation1, cards: 1, draw: 0 };
        state.make_move(mv);
        assert_eq!(state.foundation_count(), 1);
        assert_eq!(state.pile(PileId::Tableau1).len(), 0);
        state.undo_move(mv, false);
        assert_eq!(state.foundation_count(), 0);
        assert_eq!(state.pile(PileId::Tableau1).len(), 1);
    }

    #[test]
    fn draw_then_undo_restores_exact_state() {
        let mut state = GameState::new_dealt(ordered_deck());
        let before_stock = state.pile(PileId::Stock).cards().to_vec();
        let before_waste = state.pile(PileId::Waste).cards().to_vec();
        let thru = state.draw_talon(3, false);
        state.draw_talon_undo(3, thru);
        assert_eq!(state.pile(PileId::Stock).cards(), before_stock.as_slice());
        assert_eq!(state.pile(PileId::Waste).cards(), before_waste.as_slice());
    }
}
