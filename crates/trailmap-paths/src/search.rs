use trailmap_core::{Coordinate, Range, TerrainMap};

use crate::frontier::Frontier;

/// Sentinel best cost of a node the search has not reached.
pub(crate) const UNREACHABLE: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// One grid cell as seen by a single search.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: Coordinate,
    /// Next node on the cheapest known way to the source.
    pub(crate) predecessor: Option<usize>,
    pub(crate) best_cost: u64,
}

/// Counters from one finished search, for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub(crate) settled: usize,
    pub(crate) peak_frontier: usize,
}

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// All state of one Dijkstra run: node table, frontier, settled set.
///
/// A context is built for exactly one request and dropped when it returns,
/// so nothing leaks between calls and concurrent calls share nothing.
///
/// The search is rooted at the route's *destination*. Predecessor links
/// then point from any reached cell toward the destination, so walking them
/// from the start yields the route already in start → end order.
pub(crate) struct SearchContext<'m> {
    map: &'m TerrainMap,
    bounds: Range,
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    settled: Vec<bool>,
    source: usize,
}

impl<'m> SearchContext<'m> {
    /// Prepare a search rooted at `source`, which must lie inside `map`.
    ///
    /// The source starts settled at cost 0; every other node is
    /// [`UNREACHABLE`] with no predecessor.
    pub(crate) fn rooted_at(map: &'m TerrainMap, source: Coordinate) -> Option<Self> {
        let bounds = map.bounds();
        let si = bounds.index(source)?;
        let nodes = bounds
            .iter()
            .map(|pos| SearchNode {
                pos,
                predecessor: None,
                best_cost: UNREACHABLE,
            })
            .collect::<Vec<_>>();
        let mut ctx = Self {
            map,
            bounds,
            frontier: Frontier::with_nodes(nodes.len()),
            settled: vec![false; nodes.len()],
            nodes,
            source: si,
        };
        ctx.nodes[si].best_cost = 0;
        ctx.settled[si] = true;
        Some(ctx)
    }

    /// Run Dijkstra until the frontier is exhausted.
    pub(crate) fn run(&mut self) -> SearchStats {
        let mut stats = SearchStats {
            settled: 1,
            peak_frontier: 0,
        };
        self.expand(self.source);
        while !self.frontier.is_empty() {
            stats.peak_frontier = stats.peak_frontier.max(self.frontier.len());
            let Some((next, _)) = self.frontier.pop_min() else {
                break;
            };
            debug_assert!(!self.settled[next] && !self.frontier.contains(next));
            self.settled[next] = true;
            stats.settled += 1;
            self.expand(next);
        }
        stats
    }

    /// Relax the unsettled, walkable 4-neighbours of `current`.
    fn expand(&mut self, current: usize) {
        let current_cost = self.nodes[current].best_cost;
        let map = self.map;
        let cells = map.cells();

        for np in self.nodes[current].pos.neighbors_4() {
            let Some(ni) = self.bounds.index(np) else {
                continue;
            };
            if self.settled[ni] || cells[ni].is_obstacle() {
                continue;
            }
            let candidate = current_cost.saturating_add(u64::from(cells[ni].cost()));
            let n = &mut self.nodes[ni];
            if candidate < n.best_cost {
                n.best_cost = candidate;
                n.predecessor = Some(current);
                self.frontier.file(ni, candidate);
            }
        }
    }

    /// Best known cost from `from` to the source, or `None` if unreached
    /// or outside the map.
    pub(crate) fn cost_from(&self, from: Coordinate) -> Option<u64> {
        let i = self.bounds.index(from)?;
        let cost = self.nodes[i].best_cost;
        (cost != UNREACHABLE).then_some(cost)
    }

    /// The route from `from` to the source by following predecessors.
    ///
    /// Empty when `from` was never reached. `[from]` when `from` is the
    /// source itself.
    pub(crate) fn path_from(&self, from: Coordinate) -> Vec<Coordinate> {
        let Some(mut ci) = self.bounds.index(from) else {
            return Vec::new();
        };
        if ci != self.source && self.nodes[ci].predecessor.is_none() {
            return Vec::new();
        }

        let mut path = vec![self.nodes[ci].pos];
        while let Some(pi) = self.nodes[ci].predecessor {
            path.push(self.nodes[pi].pos);
            ci = pi;
        }
        debug_assert_eq!(ci, self.source);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_settled_at_zero() {
        let map = TerrainMap::new(3, 3);
        let ctx = SearchContext::rooted_at(&map, Coordinate::new(1, 1)).unwrap();
        assert_eq!(ctx.cost_from(Coordinate::new(1, 1)), Some(0));
        assert_eq!(ctx.cost_from(Coordinate::new(0, 0)), None);
        assert!(ctx.frontier.is_empty());
    }

    #[test]
    fn walled_in_source_settles_alone() {
        let map = TerrainMap::from_layout(
            "\
.#.
#.#
.#.",
        )
        .unwrap();
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(1, 1)).unwrap();
        let stats = ctx.run();
        assert_eq!(
            stats,
            SearchStats {
                settled: 1,
                peak_frontier: 0
            }
        );
        assert!(ctx.frontier.is_empty());
    }

    #[test]
    fn stats_track_frontier_peak() {
        let map = TerrainMap::new(3, 3);
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(1, 1)).unwrap();
        let stats = ctx.run();
        assert_eq!(stats.settled, 9);
        assert!(stats.peak_frontier >= 4);
        assert!(ctx.frontier.is_empty());
    }

    #[test]
    fn source_outside_map() {
        let map = TerrainMap::new(3, 3);
        assert!(SearchContext::rooted_at(&map, Coordinate::new(3, 0)).is_none());
    }

    #[test]
    fn run_settles_every_walkable_cell() {
        let map = TerrainMap::from_layout(
            "\
..#
.##
...",
        )
        .unwrap();
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(0, 0)).unwrap();
        assert_eq!(ctx.run().settled, 6);
        assert_eq!(ctx.cost_from(Coordinate::new(2, 2)), Some(4));
        assert_eq!(ctx.cost_from(Coordinate::new(2, 0)), None);
    }

    #[test]
    fn costs_count_entered_cells_only() {
        // Costs along the row: the source's own cost is never paid.
        let map = TerrainMap::from_layout("9234").unwrap();
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(0, 0)).unwrap();
        ctx.run();
        assert_eq!(ctx.cost_from(Coordinate::new(1, 0)), Some(2));
        assert_eq!(ctx.cost_from(Coordinate::new(3, 0)), Some(9));
    }

    #[test]
    fn path_walks_toward_source() {
        let map = TerrainMap::new(4, 1);
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(3, 0)).unwrap();
        ctx.run();
        assert_eq!(
            ctx.path_from(Coordinate::new(0, 0)),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(3, 0),
            ]
        );
        assert_eq!(
            ctx.path_from(Coordinate::new(3, 0)),
            vec![Coordinate::new(3, 0)]
        );
    }

    #[test]
    fn path_from_unreached_is_empty() {
        let map = TerrainMap::from_layout(".#.").unwrap();
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(0, 0)).unwrap();
        ctx.run();
        assert!(ctx.path_from(Coordinate::new(2, 0)).is_empty());
        assert!(ctx.path_from(Coordinate::new(9, 0)).is_empty());
    }

    #[test]
    fn cheaper_detour_wins() {
        let map = TerrainMap::from_layout(
            "\
.9.
...",
        )
        .unwrap();
        let mut ctx = SearchContext::rooted_at(&map, Coordinate::new(2, 0)).unwrap();
        ctx.run();
        assert_eq!(ctx.cost_from(Coordinate::new(0, 0)), Some(4));
        let path = ctx.path_from(Coordinate::new(0, 0));
        assert!(!path.contains(&Coordinate::new(1, 0)));
        assert_eq!(path.len(), 5);
    }
}
