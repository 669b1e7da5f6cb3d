//! IDA* search: repeatedly expand the best-ranked frontier node, and when the
//! frontier dries up without a win, raise the move-count bound by one and
//! prune back to only the nodes that bound actually reopens.

use klondike_engine::{Card, GameState};

use crate::arena::MoveArena;
use crate::config::{ARENA_INITIAL_CAPACITY, FINGERPRINT_INITIAL_CAPACITY, MAX_DEPTH};
use crate::fingerprint::FingerprintMap;

#[derive(Debug, Clone, Copy)]
pub enum Progress {
    /// A new best foundation count (or a within-bound win) was reached.
    Depth { total_moves: i32, open_size: usize, open_top: i32, closed_size: usize, foundation: u8 },
    /// The frontier dried up at the current bound; it was raised and pruned.
    Reopening { new_bound: i32, open_before: usize, open_size: usize, open_top: i32, closed_size: usize },
}

pub struct Outcome {
    pub foundation_count: u8,
    pub solved: bool,
    pub moves: Vec<klondike_engine::Move>,
    pub bound: i32,
}

/// Runs IDA* to completion: a win within `max_depth`, an exhausted search
/// space, or the hard `MAX_DEPTH` give-up cap, whichever comes first.
pub fn solve(deck: [Card; 52], max_depth: i32, mut on_progress: impl FnMut(Progress)) -> Outcome {
    let mut mm = max_depth;
    let mut best_f: u8 = 0;
    let mut state = GameState::new_dealt(deck);

    let mut closed = FingerprintMap::with_capacity(FINGERPRINT_INITIAL_CAPACITY);
    closed.get_or_insert(state.canonical_key(), state.min_win_at());

    let mut arena = MoveArena::with_capacity(ARENA_INITIAL_CAPACITY);
    arena.add(None, state.min_win_at() << 12, None);

    while arena.top() > 0 {
        let parent = arena.pop_for_expansion();
        let chain = arena.chain_to(parent);
        state.reset(deck);
        let mut wa = 0i32;
        for mv in &chain {
            wa += mv.draw as i32 + 1;
        }
        state.make_move_chain(&chain);

        if state.foundation_count() > best_f || (state.foundation_count() == 52 && wa <= mm) {
            best_f = state.foundation_count();
            on_progress(Progress::Depth {
                total_moves: wa,
                open_size: arena.size(),
                open_top: arena.top(),
                closed_size: closed.len(),
                foundation: best_f,
            });
            if best_f == 52 && wa <= mm {
                return Outcome { foundation_count: 52, solved: true, moves: chain, bound: wa };
            }
        }

        let candidates = state.generate_moves();
        let mut added = 0usize;
        for mv in &candidates {
            let thru = state.make_move(*mv);
            let mvs = wa + mv.draw as i32 + 1 + state.min_win_at();
            if mvs <= mm {
                let key = state.canonical_key();
                added += 1;
                match closed.get_or_insert(key.clone(), mvs) {
                    None => {
                        let priority = ((52 - state.foundation_count() as i32 + state.rounds() as i32) << 5) | mv.draw as i32;
                        arena.add(Some(*mv), priority, Some(parent));
                    }
                    Some(existing) if existing > mvs => {
                        let priority = ((52 - state.foundation_count() as i32 + state.rounds() as i32) << 5) | mv.draw as i32;
                        arena.add(Some(*mv), priority, Some(parent));
                        closed.update(&key, mvs);
                    }
                    _ => {}
                }
            }
            state.undo_move(*mv, thru);
        }

        if added == candidates.len() {
            arena.set_used(parent);
        }

        if arena.top() == 0 && best_f < 52 {
            mm += 1;
            if mm > MAX_DEPTH {
                return Outcome { foundation_count: best_f, solved: false, moves: Vec::new(), bound: mm };
            }
            let open_before = arena.size();
            arena.prune();
            on_progress(Progress::Reopening {
                new_bound: mm,
                open_before,
                open_size: arena.size(),
                open_top: arena.top(),
                closed_size: closed.len(),
            });
        }
    }

    Outcome { foundation_count: best_f, solved: false, moves: Vec::new(), bound: mm }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_engine::deck;

    #[test]
    fn solves_a_trivially_ordered_deck_without_panicking() {
        let cards: [Card; 52] = std::array::from_fn(|i| Card::from_value(i as u8));
        let outcome = solve(cards, 40, |_| {});
        assert!(outcome.foundation_count <= 52);
        let _ = deck::to_digit_string(&cards);
    }
}
