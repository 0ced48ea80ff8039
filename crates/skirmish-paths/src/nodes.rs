//! Per-tile search state, stored as parallel arrays indexed by tile.

use std::cmp::Ordering;

/// Parent link of a node that has none (the search start, or unvisited).
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Cost of a node the current search has not reached.
pub(crate) const UNREACHED: i32 = i32::MAX;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum NodeState {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Search state for every tile of a [`Pathfinder`](crate::Pathfinder) range.
///
/// Allocated once, then [`reset`](SearchNodes::reset) at the start of each
/// search. Parent links are indices into the same arrays.
#[derive(Debug, Default)]
pub(crate) struct SearchNodes {
    /// Cost so far from the start.
    pub(crate) g: Vec<i32>,
    /// Heuristic estimate to the goal (0 for range searches).
    pub(crate) h: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) state: Vec<NodeState>,
    /// Order in which each node first entered the open set.
    pub(crate) seq: Vec<u32>,
    next_seq: u32,
}

impl SearchNodes {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            g: vec![UNREACHED; len],
            h: vec![0; len],
            parent: vec![NO_PARENT; len],
            state: vec![NodeState::Unvisited; len],
            seq: vec![0; len],
            next_seq: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.g.len()
    }

    /// Grow the arrays to hold at least `len` nodes.
    pub(crate) fn reserve_nodes(&mut self, len: usize) {
        if len > self.len() {
            *self = Self::new(len);
        }
    }

    /// Forget everything the previous search wrote.
    pub(crate) fn reset(&mut self) {
        self.g.fill(UNREACHED);
        self.h.fill(0);
        self.parent.fill(NO_PARENT);
        self.state.fill(NodeState::Unvisited);
        self.seq.fill(0);
        self.next_seq = 0;
    }

    #[inline]
    pub(crate) fn f(&self, i: usize) -> i32 {
        self.g[i] + self.h[i]
    }

    #[inline]
    pub(crate) fn is_open(&self, i: usize) -> bool {
        self.state[i] == NodeState::Open
    }

    #[inline]
    pub(crate) fn is_closed(&self, i: usize) -> bool {
        self.state[i] == NodeState::Closed
    }

    /// Record a (better) route to node `i` and put it in the open set.
    ///
    /// Returns `true` if the node was not already open. A node that is
    /// already open keeps its admission order.
    pub(crate) fn open(&mut self, i: usize, g: i32, h: i32, parent: usize) -> bool {
        self.g[i] = g;
        self.h[i] = h;
        self.parent[i] = parent;
        if self.state[i] == NodeState::Open {
            return false;
        }
        self.state[i] = NodeState::Open;
        self.seq[i] = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        true
    }

    #[inline]
    pub(crate) fn close(&mut self, i: usize) {
        self.state[i] = NodeState::Closed;
    }

    /// Heap entry for node `i` with its current costs.
    #[inline]
    pub(crate) fn entry(&self, i: usize) -> NodeRef {
        NodeRef {
            idx: i,
            g: self.g[i],
            f: self.f(i),
            h: self.h[i],
            seq: self.seq[i],
        }
    }

    /// Follow parent links back from `goal`, returning node indices in
    /// travel order. The node without a parent (the start) is excluded.
    pub(crate) fn retrace(&self, goal: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut ci = goal;
        while self.parent[ci] != NO_PARENT {
            path.push(ci);
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

/// Open-set entry, ordered for use in a max-`BinaryHeap` so that the pop
/// yields the lowest `f`, then the lowest `h`, then the earliest admission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    /// `g` at push time, to detect entries superseded by a cheaper route.
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
