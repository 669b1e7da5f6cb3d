//! Initial deal: slot `i` always lands in the same pile position regardless
//! of which card currently occupies it, so re-dealing (after a shuffle or a
//! fresh `load`) only needs the 52-card array, never per-card bookkeeping.

use super::GameState;
use crate::card::Card;
use crate::pile::{Pile, PileId, PILE_COUNT};

impl GameState {
    /// Builds a freshly dealt game from 52 cards in slot order: slots
    /// `0..28` fill the seven tableau columns (1 card in column 1 up to 7 in
    /// column 7), slots `28..52` fill the stock face-down, top of stock being
    /// slot 51.
    pub fn new_dealt(cards: [Card; 52]) -> GameState {
        let mut state = GameState {
            cards,
            piles: std::array::from_fn(|_| Pile::new()),
            red_min: -1,
            black_min: -1,
            rounds: 0,
            found_count: 0,
        };
        state.deal();
        state
    }

    /// Re-deals in place from a (possibly new) 52-card array, clearing all
    /// foundation/round bookkeeping. Used by the search driver to reset to
    /// the start of a deal between iterations without reallocating.
    pub fn reset(&mut self, cards: [Card; 52]) {
        self.cards = cards;
        for pile in &mut self.piles {
            pile.clear();
        }
        self.red_min = -1;
        self.black_min = -1;
        self.rounds = 0;
        self.found_count = 0;
        self.deal();
    }

    fn deal(&mut self) {
        let mut slot = 0u8;
        for start in 1..=7u8 {
            for k in start..=7u8 {
                self.piles[PileId::from_index(k as usize).index()].add(slot);
                slot += 1;
            }
        }
        debug_assert_eq!(slot, 28);
        for s in (28..52u8).rev() {
            self.piles[PileId::Stock.index()].add(s);
        }
        for id in PileId::TABLEAU {
            if let Some((flipped_slot, up)) = self.piles[id.index()].flip() {
                self.cards[flipped_slot as usize].set_face_up(up);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn ordered_deck() -> [Card; 52] {
        std::array::from_fn(|i| Card::from_value(i as u8))
    }

    #[test]
    fn deals_28_tableau_cards_and_24_stock_cards() {
        let state = GameState::new_dealt(ordered_deck());
        let tableau_total: usize = PileId::TABLEAU.iter().map(|&id| state.pile(id).len()).sum();
        assert_eq!(tableau_total, 28);
        assert_eq!(state.pile(PileId::Stock).len(), 24);
        assert_eq!(state.pile(PileId::Waste).len(), 0);
        for &id in &PileId::FOUNDATION {
            assert_eq!(state.pile(id).len(), 0);
        }
    }

    #[test]
    fn tableau_column_n_has_n_cards_with_one_face_up() {
        let state = GameState::new_dealt(ordered_deck());
        for (i, &id) in PileId::TABLEAU.iter().enumerate() {
            let pile = state.pile(id);
            assert_eq!(pile.len(), i + 1);
            assert_eq!(pile.face_up_count(), 1);
        }
    }

    #[test]
    fn stock_top_is_slot_51_face_down() {
        let state = GameState::new_dealt(ordered_deck());
        let stock = state.pile(PileId::Stock);
        assert_eq!(stock.top_card_index(), Some(51));
        assert!(!state.card_at(51).face_up);
    }

    #[test]
    fn reset_rebuilds_identical_layout_for_any_cards() {
        let mut state = GameState::new_dealt(ordered_deck());
        let shuffled: [Card; 52] = std::array::from_fn(|i| Card::new((i % 13) as u8, Suit::Clubs));
        state.reset(shuffled);
        assert_eq!(state.foundation_count(), 0);
        assert_eq!(state.rounds(), 0);
        assert_eq!(state.pile(PileId::Tableau7).len(), 7);
    }
}
