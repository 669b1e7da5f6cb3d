//! The search frontier: a priority-ordered, singly-linked pool of move
//! nodes. Each node also carries a `parent` link back toward the root, so a
//! frontier node doubles as the tail of the move chain that reaches it —
//! replaying a solution is just a walk up `parent` pointers.
//!
//! Nodes are never freed individually; a node that `prune` drops returns its
//! slot to a free list so the next `add` reuses it instead of growing the
//! backing store, keeping memory bounded across iterative-deepening rounds.

use klondike_engine::Move;

#[derive(Debug, Clone, Copy)]
struct ArenaNode {
    mv: Option<Move>,
    priority: i32,
    used: bool,
    req: bool,
    parent: Option<u32>,
    queue_next: Option<u32>,
}

/// The bounded-walk insertion depth scales with how many nodes are currently
/// pending expansion, capped so a single `add` never degrades to O(n).
fn insertion_walk_limit(pending: i32) -> i32 {
    (80 + (pending >> 5)).min(256)
}

pub struct MoveArena {
    store: Vec<ArenaNode>,
    free: Vec<u32>,
    first: Option<u32>,
    last: Option<u32>,
    size: usize,
    top: i32,
}

impl MoveArena {
    pub fn with_capacity(capacity: usize) -> Self {
        MoveArena {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
            first: None,
            last: None,
            size: 0,
            top: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Count of frontier nodes not yet fully expanded.
    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn mv(&self, idx: u32) -> Option<Move> {
        self.store[idx as usize].mv
    }

    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.store[idx as usize].parent
    }

    #[cfg(test)]
    fn priority(&self, idx: u32) -> i32 {
        self.store[idx as usize].priority
    }

    pub fn set_used(&mut self, idx: u32) {
        self.store[idx as usize].used = true;
    }

    /// Inserts a new node, keeping the queue sorted ascending by priority via
    /// a bounded linear walk from the front (cheap because most insertions
    /// land near the already-best-ranked nodes).
    pub fn add(&mut self, mv: Option<Move>, priority: i32, parent: Option<u32>) -> u32 {
        let idx = match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.store.push(ArenaNode {
                    mv: None,
                    priority: 0,
                    used: false,
                    req: false,
                    parent: None,
                    queue_next: None,
                });
                (self.store.len() - 1) as u32
            }
        };
        self.store[idx as usize] = ArenaNode { mv, priority, used: false, req: false, parent, queue_next: None };
        self.top += 1;
        self.size += 1;

        match (self.first, self.last) {
            (None, None) => {
                self.first = Some(idx);
                self.last = Some(idx);
            }
            (Some(first_idx), Some(last_idx)) => {
                if priority >= self.store[last_idx as usize].priority {
                    self.store[last_idx as usize].queue_next = Some(idx);
                    self.last = Some(idx);
                } else if priority <= self.store[first_idx as usize].priority {
                    self.store[idx as usize].queue_next = Some(first_idx);
                    self.first = Some(idx);
                } else {
                    let mut cur = first_idx;
                    let mut amt = 0;
                    let limit = insertion_walk_limit(self.top);
                    while amt < limit {
                        match self.store[cur as usize].queue_next {
                            Some(next) if priority > self.store[next as usize].priority => {
                                cur = next;
                                amt += 1;
                            }
                            _ => break,
                        }
                    }
                    let after = self.store[cur as usize].queue_next;
                    self.store[idx as usize].queue_next = after;
                    self.store[cur as usize].queue_next = Some(idx);
                    if let Some(new_last) = self.store[self.last.unwrap() as usize].queue_next {
                        self.last = Some(new_last);
                    }
                }
            }
            _ => unreachable!("first and last are always both set or both unset"),
        }
        idx
    }

    /// Dequeues the highest-priority (front) node for expansion, moving it to
    /// the tail so its slot is reachable again until pruned.
    pub fn pop_for_expansion(&mut self) -> u32 {
        let first_idx = self.first.expect("pop_for_expansion called with top() == 0");
        if self.last != Some(first_idx) {
            let new_first = self.store[first_idx as usize].queue_next;
            let last_idx = self.last.unwrap();
            self.store[last_idx as usize].queue_next = Some(first_idx);
            self.store[first_idx as usize].queue_next = None;
            self.first = new_first;
            self.last = Some(first_idx);
        }
        self.top -= 1;
        first_idx
    }

    /// Collects the move chain from root to `leaf`, in root-to-leaf order.
    pub fn chain_to(&self, leaf: u32) -> Vec<Move> {
        let mut chain = Vec::new();
        let mut cursor = Some(leaf);
        while let Some(idx) = cursor {
            match self.store[idx as usize].mv {
                Some(mv) => {
                    chain.push(mv);
                    cursor = self.store[idx as usize].parent;
                }
                None => cursor = None,
            }
        }
        chain.reverse();
        chain
    }

    /// Drops every node not needed to keep expanding (its `used` flag never
    /// got set, meaning some of its children were cut off by the old depth
    /// bound) along with its ancestor chain, recycling the rest. Called when
    /// a deepening round exhausts the frontier without finding a win.
    pub fn prune(&mut self) {
        let mut cur = self.first;
        while let Some(idx) = cur {
            if !self.store[idx as usize].used {
                self.mark_required(idx);
            }
            cur = self.store[idx as usize].queue_next;
        }

        let mut new_first = None;
        let mut new_last: Option<u32> = None;
        let mut cur = self.first;
        while let Some(idx) = cur {
            let next = self.store[idx as usize].queue_next;
            if self.store[idx as usize].req {
                self.store[idx as usize].req = false;
                self.store[idx as usize].queue_next = None;
                match new_last {
                    Some(l) => self.store[l as usize].queue_next = Some(idx),
                    None => new_first = Some(idx),
                }
                new_last = Some(idx);
            } else {
                self.free.push(idx);
                self.size -= 1;
            }
            cur = next;
        }
        self.first = new_first;
        self.last = new_last;
        self.sort_ascending();
    }

    fn mark_required(&mut self, idx: u32) {
        self.store[idx as usize].req = true;
        self.top += 1;
        let mut p = self.store[idx as usize].parent;
        while let Some(pidx) = p {
            if self.store[pidx as usize].req {
                break;
            }
            self.store[pidx as usize].req = true;
            p = self.store[pidx as usize].parent;
        }
    }

    /// Two-pass 16-bit-bucket counting sort over the priority key, restoring
    /// ascending queue order after a prune reshuffles the chain.
    ///
    /// `used` nodes are kept in the queue only as ancestors needed to
    /// reconstruct a descendant's move chain — they have nothing left to
    /// expand. They're partitioned to the tail, after every unused node,
    /// regardless of priority, the same way the original folds its `USED`
    /// bit into the same sort key as priority so used nodes always sort
    /// last. Without this, a used ancestor could land at the front of the
    /// post-prune queue and get popped ahead of a genuinely unused node,
    /// draining `top` for a node that was never counted in it.
    fn sort_ascending(&mut self) {
        if self.size < 2 {
            return;
        }
        let mut ids = Vec::with_capacity(self.size);
        let mut cur = self.first;
        while let Some(idx) = cur {
            ids.push(idx);
            cur = self.store[idx as usize].queue_next;
        }

        let (unused, used): (Vec<u32>, Vec<u32>) = ids.into_iter().partition(|&id| !self.store[id as usize].used);
        let mut ids = self.radix_sort_by_priority(unused);
        ids.extend(self.radix_sort_by_priority(used));

        for window in ids.windows(2) {
            self.store[window[0] as usize].queue_next = Some(window[1]);
        }
        if let Some(&last) = ids.last() {
            self.store[last as usize].queue_next = None;
        }
        self.first = ids.first().copied();
        self.last = ids.last().copied();
    }

    fn radix_sort_by_priority(&self, mut ids: Vec<u32>) -> Vec<u32> {
        for shift in [0u32, 16u32] {
            let bucket_of = |id: u32| -> usize { ((self.store[id as usize].priority >> shift) & 0xffff) as usize };
            let mut counts = vec![0usize; 65537];
            for &id in &ids {
                counts[bucket_of(id) + 1] += 1;
            }
            for i in 1..counts.len() {
                counts[i] += counts[i - 1];
            }
            let mut sorted = vec![0u32; ids.len()];
            for &id in &ids {
                let bucket = bucket_of(id);
                sorted[counts[bucket]] = id;
                counts[bucket] += 1;
            }
            ids = sorted;
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_engine::PileId;

    fn mv(draw: u8) -> Move {
        Move { from: PileId::Waste, to: PileId::Tableau1, cards: 1, draw }
    }

    #[test]
    fn add_keeps_queue_sorted_ascending() {
        let mut arena = MoveArena::with_capacity(16);
        arena.add(None, 50, None);
        arena.add(Some(mv(0)), 10, None);
        arena.add(Some(mv(1)), 80, None);
        arena.add(Some(mv(2)), 40, None);

        let mut priorities = Vec::new();
        while arena.top() > 0 {
            let idx = arena.pop_for_expansion();
            priorities.push(arena.priority(idx));
        }
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn prune_keeps_unused_nodes_and_their_ancestors() {
        let mut arena = MoveArena::with_capacity(16);
        let root = arena.add(None, 0, None);
        let child = arena.add(Some(mv(0)), 1, Some(root));
        let grandchild = arena.add(Some(mv(1)), 2, Some(child));
        // Mark root and child as fully expanded (used); grandchild stays unused.
        arena.set_used(root);
        arena.set_used(child);
        let size_before = arena.size();
        arena.prune();
        assert!(arena.size() <= size_before);
        assert_eq!(arena.chain_to(grandchild).len(), 2);
    }
}
