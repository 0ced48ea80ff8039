use std::collections::VecDeque;

use skirmish_core::Point;

use crate::Pathfinder;
use crate::error::SearchError;
use crate::nodes::NO_PARENT;
use crate::path::ReachableSet;
use crate::traits::WeightedPather;

impl Pathfinder {
    /// Compute the tiles reachable from `from` within a movement `budget`.
    ///
    /// Expansion uses the same neighbors and step costs as
    /// [`find_path`](Pathfinder::find_path) but no heuristic, and open nodes
    /// are expanded in the order they were first discovered rather than by
    /// cost: a node whose route gets cheaper keeps its place in the queue,
    /// and a node's cost is locked once it is expanded. Steps that would
    /// exceed `budget` are discarded. The start tile is always included.
    pub fn walkable<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        budget: i32,
    ) -> Result<ReachableSet, SearchError> {
        if budget < 0 {
            return Err(SearchError::InvalidBudget(budget));
        }
        let start_idx = self.idx(from).ok_or(SearchError::OutOfBounds(from))?;

        self.nodes.reset();
        self.nodes.open(start_idx, 0, 0, NO_PARENT);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut reached = ReachableSet::with_capacity(16);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut steps = 0;

        let outcome = 'search: {
            while let Some(ci) = queue.pop_front() {
                if let Err(err) = self.step(&mut steps) {
                    break 'search Err(err);
                }

                self.nodes.close(ci);
                let current_g = self.nodes.g[ci];
                let cp = self.point(ci);
                reached.insert(cp, current_g);

                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.nodes.is_closed(ni) {
                        continue;
                    }
                    let tentative = current_g + pather.cost(cp, np);
                    if tentative > budget {
                        continue;
                    }
                    if self.nodes.is_open(ni) && tentative >= self.nodes.g[ni] {
                        continue;
                    }
                    if self.nodes.open(ni, tentative, 0, ci) {
                        queue.push_back(ni);
                    }
                }
            }
            Ok(())
        };

        self.nbuf = nbuf;
        outcome?;

        log::debug!(
            "{} tiles walkable from {from} within {budget} ({steps} nodes expanded)",
            reached.len()
        );
        Ok(reached)
    }
}
