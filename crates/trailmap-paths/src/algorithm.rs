use std::borrow::Cow;

use trailmap_core::{Coordinate, TerrainMap};

use crate::cost_mode::CostMode;
use crate::error::{EndpointFault, RouteError};
use crate::search::SearchContext;
use crate::traits::PathFinder;

/// Dijkstra-based [`PathFinder`].
///
/// The finder itself holds no state: every request builds its own search
/// context, so one value can be shared freely, including across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PathFinderAlgorithm;

impl PathFinderAlgorithm {
    pub const fn new() -> Self {
        Self
    }

    /// Cost of the best route from `start` to `end`: the summed cost of
    /// every cell entered after `start`, measured on the map the search
    /// ran on (the gradient map for [`CostMode::CostsAndNumberPoints`]).
    /// `None` when unreachable.
    pub fn route_cost(
        &self,
        map: &TerrainMap,
        start: Coordinate,
        end: Coordinate,
        mode: CostMode,
    ) -> Result<Option<u64>, RouteError> {
        check_endpoint(map, start)?;
        check_endpoint(map, end)?;
        let working = working_map(map, start, mode);
        let mut ctx = search_from(&working, end)?;
        ctx.run();
        // Rooted at `end`, the search pays for `start` but not for `end`.
        let cell_cost = |at: Coordinate| working.get(at).map_or(0, |m| u64::from(m.cost()));
        Ok(ctx
            .cost_from(start)
            .map(|c| c + cell_cost(end) - cell_cost(start)))
    }
}

impl PathFinder for PathFinderAlgorithm {
    fn route(
        &self,
        map: &TerrainMap,
        start: Coordinate,
        end: Coordinate,
        mode: CostMode,
    ) -> Result<Vec<Coordinate>, RouteError> {
        check_endpoint(map, start)?;
        check_endpoint(map, end)?;
        segment(map, start, end, mode)
    }

    fn route_via(
        &self,
        map: &TerrainMap,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
        mode: CostMode,
    ) -> Result<Vec<Coordinate>, RouteError> {
        if waypoints.is_empty() {
            return self.route(map, start, end, mode);
        }

        // Reject bad input before spending any search on it.
        check_endpoint(map, start)?;
        for &w in waypoints {
            check_endpoint(map, w)?;
        }
        check_endpoint(map, end)?;

        let stops: Vec<Coordinate> = std::iter::once(start)
            .chain(waypoints.iter().copied())
            .chain(std::iter::once(end))
            .collect();

        let mut path: Vec<Coordinate> = Vec::new();
        for (leg, pair) in stops.windows(2).enumerate() {
            let part = segment(map, pair[0], pair[1], mode)?;
            if part.is_empty() {
                log::debug!("leg {leg} {} -> {} unreachable", pair[0], pair[1]);
                return Ok(Vec::new());
            }
            log::trace!("leg {leg} {} -> {}: {} cells", pair[0], pair[1], part.len());
            // Every leg after the first starts where the previous one ended.
            let skip = usize::from(leg > 0);
            path.extend(part.into_iter().skip(skip));
        }
        Ok(path)
    }
}

/// Fail unless `at` is inside `map` and walkable.
fn check_endpoint(map: &TerrainMap, at: Coordinate) -> Result<(), RouteError> {
    let reason = match map.get(at) {
        Err(_) => EndpointFault::OutsideMap,
        Ok(m) if m.is_obstacle() => EndpointFault::Obstacle,
        Ok(_) => return Ok(()),
    };
    Err(RouteError::InvalidEndpoint { at, reason })
}

/// The map a search for a route starting at `start` runs on.
fn working_map(map: &TerrainMap, start: Coordinate, mode: CostMode) -> Cow<'_, TerrainMap> {
    match mode {
        CostMode::CostsOnly => Cow::Borrowed(map),
        CostMode::CostsAndNumberPoints => Cow::Owned(map.with_radial_gradient(start)),
    }
}

fn search_from(map: &TerrainMap, end: Coordinate) -> Result<SearchContext<'_>, RouteError> {
    SearchContext::rooted_at(map, end).ok_or(RouteError::InvalidEndpoint {
        at: end,
        reason: EndpointFault::OutsideMap,
    })
}

/// One two-point search; endpoints are expected to be validated already.
fn segment(
    map: &TerrainMap,
    start: Coordinate,
    end: Coordinate,
    mode: CostMode,
) -> Result<Vec<Coordinate>, RouteError> {
    let working = working_map(map, start, mode);
    let mut ctx = search_from(&working, end)?;
    let stats = ctx.run();
    let path = ctx.path_from(start);
    log::debug!(
        "route {start} -> {end} ({mode}): {} cells, settled {}, peak frontier {}",
        path.len(),
        stats.settled,
        stats.peak_frontier
    );
    Ok(path)
}
