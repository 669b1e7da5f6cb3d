//! Legal move generation.
//!
//! Mirrors the seven-category scan the original engine runs on every node:
//! forced tableau flips, tableau-to-foundation/tableau, waste-to-foundation/
//! tableau, foundation-to-tableau, and the two stock/waste "peek ahead"
//! categories that let the search jump straight to a buried card without
//! enumerating every intermediate draw. Categories short-circuit: a forced
//! flip or a safe foundation send is returned as the *only* move, since
//! taking it is never wrong and delaying it only inflates the search tree.

use super::GameState;
use crate::card::Color;
use crate::pile::PileId;

/// One candidate move: send `cards` cards from `from` to `to`, after first
/// drawing `draw` cards from the stock (0 for anything not stock-sourced).
/// `from == to` with `cards == 0` denotes flipping the revealed tableau card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: PileId,
    pub to: PileId,
    pub cards: u8,
    pub draw: u8,
}

impl GameState {
    fn safe_send_floor(&self, color: Color) -> i8 {
        match color {
            Color::Black => self.red_min,
            Color::Red => self.black_min,
        }
    }

    pub fn generate_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        // Forced flip of a tableau pile's newly exposed face-down card. Always
        // correct to take immediately, so it preempts everything else.
        for &i in &PileId::TABLEAU {
            let pile = self.pile(i);
            if pile.is_empty() {
                continue;
            }
            let top_slot = pile.top_card_index().expect("non-empty pile has a top card");
            if !self.card_at(top_slot).face_up {
                return vec![Move { from: i, to: i, cards: 0, draw: 0 }];
            }
        }

        let waste_len = self.pile(PileId::Waste).len();
        let stock_len = self.pile(PileId::Stock).len();

        let stock_king = self
            .pile(PileId::Stock)
            .cards()
            .iter()
            .any(|&slot| self.card_at(slot).rank == 12)
            || self
                .pile(PileId::Waste)
                .cards()
                .iter()
                .any(|&slot| self.card_at(slot).rank == 12);

        // amt memoizes whether moving an already fully-exposed tableau column is
        // worthwhile; computed once, the first time it's needed.
        let mut amt: Option<i32> = None;

        for &i in &PileId::TABLEAU {
            let pile1 = self.pile(i);
            if pile1.is_empty() {
                continue;
            }
            let pile1_size = pile1.len();
            let card1_slot = pile1.top_card_index().expect("checked non-empty");
            let card1 = self.card_at(card1_slot);

            let foundation = PileId::FOUNDATION[card1.suit as usize];
            if card1.rank as i8 - self.top_rank(foundation) == 1 {
                let min = self.safe_send_floor(card1.color()) + 2;
                if card1.rank as i8 <= min {
                    moves.clear();
                    moves.push(Move { from: i, to: foundation, cards: 1, draw: 0 });
                    return moves;
                }
                moves.push(Move { from: i, to: foundation, cards: 1, draw: 0 });
            }

            let top_idx = pile1.top().expect("checked non-empty and face-up above");
            let card2_slot = pile1.cards()[top_idx];
            let card2 = self.card_at(card2_slot);
            let pile1_length = (card2.rank as i32 - card1.rank as i32 + 1) as usize;
            let mut king_moved = false;

            for &j in &PileId::TABLEAU {
                if i == j {
                    continue;
                }
                let pile2 = self.pile(j);
                let pile2_size = pile2.len();
                if pile2_size == 0 {
                    if card2.rank != 12 || pile1_size == pile1_length || king_moved {
                        continue;
                    }
                    moves.push(Move { from: i, to: j, cards: pile1_length as u8, draw: 0 });
                    king_moved = true;
                    continue;
                }

                let card3_slot = pile2.top_card_index().expect("checked non-empty");
                let card3 = self.card_at(card3_slot);
                let color_diff = card3.color() != card1.color();
                let parity_diff = card3.parity() != card1.parity();
                if card1.rank >= card3.rank || card2.rank + 1 < card3.rank || color_diff != parity_diff {
                    continue;
                }
                let pile1_moved = (card3.rank - card1.rank) as usize;

                if pile1_moved == pile1_length {
                    if pile1_size == pile1_length {
                        if amt.is_none() {
                            let mut computed = if stock_king { -1 } else { 1 };
                            for &k in &PileId::TABLEAU {
                                let pile3 = self.pile(k);
                                if pile3.is_empty() {
                                    computed = 1;
                                    break;
                                } else if pile3.top() == Some(0) {
                                    if self.card_at(pile3.cards()[0]).rank != 12 {
                                        if computed < 0 {
                                            computed = 0;
                                            break;
                                        }
                                        computed = 2;
                                    }
                                } else if let Some(t) = pile3.top() {
                                    if t > 0 {
                                        if computed > 1 {
                                            computed = 0;
                                            break;
                                        }
                                        computed = -1;
                                    }
                                }
                            }
                            amt = Some(computed);
                        }
                        if amt == Some(0) {
                            if stock_king {
                                moves.push(Move {
                                    from: i,
                                    to: j,
                                    cards: pile1_moved as u8,
                                    draw: 0,
                                });
                            } else {
                                for &k in &PileId::TABLEAU {
                                    if k == i {
                                        continue;
                                    }
                                    let pile3 = self.pile(k);
                                    if self.top_rank(k) == 12
                                        && pile3.top().map(|t| t > 0).unwrap_or(false)
                                    {
                                        moves.push(Move {
                                            from: i,
                                            to: j,
                                            cards: pile1_moved as u8,
                                            draw: 0,
                                        });
                                        break;
                                    }
                                }
                            }
                        }
                        continue;
                    }
                    moves.push(Move { from: i, to: j, cards: pile1_moved as u8, draw: 0 });
                    continue;
                }

                // Only generate a non-maximal run move if it uncovers a card that
                // can go straight to its foundation; otherwise it's redundant.
                let revealed_slot = pile1.cards()[pile1_size - pile1_moved - 1];
                let revealed = self.card_at(revealed_slot);
                let revealed_foundation = PileId::FOUNDATION[revealed.suit as usize];
                if revealed.rank as i8 - self.top_rank(revealed_foundation) == 1 {
                    moves.push(Move { from: i, to: j, cards: pile1_moved as u8, draw: 0 });
                }
            }
        }

        if waste_len > 0 {
            let card1_slot = self.pile(PileId::Waste).top_card_index().expect("checked nonzero");
            let card1 = self.card_at(card1_slot);
            let foundation = PileId::FOUNDATION[card1.suit as usize];
            if card1.rank as i8 - self.top_rank(foundation) == 1 {
                let min = self.safe_send_floor(card1.color()) + 2;
                if card1.rank as i8 <= min {
                    moves.clear();
                    moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw: 0 });
                    return moves;
                }
                moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw: 0 });
            }
            for &i in &PileId::TABLEAU {
                let pile1 = self.pile(i);
                if !pile1.is_empty() {
                    let slot = pile1.top_card_index().expect("checked non-empty");
                    let card = self.card_at(slot);
                    if !card.face_up || card.rank as i8 - card1.rank as i8 != 1 || card.color() == card1.color() {
                        continue;
                    }
                    moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw: 0 });
                    continue;
                }
                if card1.rank != 12 {
                    continue;
                }
                moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw: 0 });
                break;
            }
        }

        // Foundation -> tableau: rarely needed, but occasionally required for
        // an optimal solution.
        for &i in &PileId::FOUNDATION {
            let pile1 = self.pile(i);
            if pile1.is_empty() {
                continue;
            }
            let slot = pile1.top_card_index().expect("checked non-empty");
            let card1 = self.card_at(slot);
            let min = self.safe_send_floor(card1.color()) + 2;
            if card1.rank as i8 <= min {
                continue;
            }
            for &j in &PileId::TABLEAU {
                let pile2 = self.pile(j);
                if pile2.is_empty() {
                    if card1.rank == 12 {
                        moves.push(Move { from: i, to: j, cards: 1, draw: 0 });
                        break;
                    }
                    continue;
                }
                let slot2 = pile2.top_card_index().expect("checked non-empty");
                let card2 = self.card_at(slot2);
                if !card2.face_up || card2.rank as i8 - card1.rank as i8 != 1 || card1.color() == card2.color() {
                    continue;
                }
                moves.push(Move { from: i, to: j, cards: 1, draw: 0 });
            }
        }

        // Cards still in the stock, not yet drawn: offer to jump straight to
        // them, recording how many draws that would take.
        let stock_cards = self.pile(PileId::Stock).cards().to_vec();
        for (j, &slot) in stock_cards.iter().enumerate().rev() {
            let card1 = self.card_at(slot);
            let foundation = PileId::FOUNDATION[card1.suit as usize];
            let draw = (stock_len - j) as u8;
            if card1.rank as i8 - self.top_rank(foundation) == 1 {
                let min = self.safe_send_floor(card1.color()) + 2;
                if card1.rank as i8 <= min {
                    moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw });
                    return moves;
                }
                moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw });
            }
            for &i in &PileId::TABLEAU {
                let pile2 = self.pile(i);
                if !pile2.is_empty() {
                    let slot2 = pile2.top_card_index().expect("checked non-empty");
                    let card = self.card_at(slot2);
                    if !card.face_up || card.rank as i8 - card1.rank as i8 != 1 || card.color() == card1.color() {
                        continue;
                    }
                    moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw });
                    continue;
                }
                if card1.rank != 12 {
                    continue;
                }
                moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw });
                break;
            }
        }

        // Cards already turned over, buried in the waste: reachable only by
        // cycling the stock all the way around ("redealing").
        if waste_len > 0 {
            let waste_cards = self.pile(PileId::Waste).cards().to_vec();
            for (j, &slot) in waste_cards[..waste_len - 1].iter().enumerate() {
                let card1 = self.card_at(slot);
                let foundation = PileId::FOUNDATION[card1.suit as usize];
                let draw = (stock_len + j + 1) as u8;
                if card1.rank as i8 - self.top_rank(foundation) == 1 {
                    let min = self.safe_send_floor(card1.color()) + 2;
                    if card1.rank as i8 <= min {
                        moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw });
                        return moves;
                    }
                    moves.push(Move { from: PileId::Waste, to: foundation, cards: 1, draw });
                }
                for &i in &PileId::TABLEAU {
                    let pile2 = self.pile(i);
                    if !pile2.is_empty() {
                        let slot2 = pile2.top_card_index().expect("checked non-empty");
                        let card = self.card_at(slot2);
                        if !card.face_up || card.rank as i8 - card1.rank as i8 != 1 || card.color() == card1.color() {
                            continue;
                        }
                        moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw });
                        continue;
                    }
                    if card1.rank != 12 {
                        continue;
                    }
                    moves.push(Move { from: PileId::Waste, to: i, cards: 1, draw });
                    break;
                }
            }
        }

        moves
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
    fn fresh_deal_has_no_forced_flip_and_some_candidate_moves() {
        let state = GameState::new_dealt(ordered_deck());
        let moves = state.generate_moves();
        // Every freshly dealt tableau column's top card starts face-up, so no
        // move here is a flip (cards == 0 with from == to).
        assert!(!moves.iter().any(|m| m.from == m.to && m.cards == 0));
    }

    #[test]
    fn single_candidate_flip_move_when_a_tableau_top_is_face_down() {
        let mut state = GameState::new_dealt(ordered_deck());
        // Force column 2's top card face-down to simulate a just-uncovered card.
        let slot = state.pile(PileId::Tableau2).top_card_index().unwrap();
        state.set_face_down_for_test(slot);
        let moves = state.generate_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].from, PileId::Tableau2);
        assert_eq!(moves[0].to, PileId::Tableau2);
        assert_eq!(moves[0].cards, 0);
    }
}
