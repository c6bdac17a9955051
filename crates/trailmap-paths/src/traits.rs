use trailmap_core::{Coordinate, TerrainMap};

use crate::cost_mode::CostMode;
use crate::error::RouteError;

/// Computes least-cost routes over a [`TerrainMap`].
///
/// Both operations return the route as coordinates from `start` to `end`
/// inclusive. An empty vector means the search ran but `end` cannot be
/// reached; a [`RouteError`] means the request itself was invalid.
pub trait PathFinder {
    /// Route from `start` to `end`.
    fn route(
        &self,
        map: &TerrainMap,
        start: Coordinate,
        end: Coordinate,
        mode: CostMode,
    ) -> Result<Vec<Coordinate>, RouteError>;

    /// Route from `start` to `end` visiting every waypoint in order.
    ///
    /// Each waypoint appears in the result exactly where consecutive legs
    /// meet. If any leg is unreachable the whole route is empty. An empty
    /// `waypoints` slice is the same as [`route`](Self::route).
    fn route_via(
        &self,
        map: &TerrainMap,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
        mode: CostMode,
    ) -> Result<Vec<Coordinate>, RouteError>;
}
