//! Least-cost routing over terrain grids.
//!
//! This crate finds the cheapest 4-directional route across a
//! [`TerrainMap`](trailmap_core::TerrainMap), where entering a cell costs
//! that cell's material cost and obstacle cells cannot be entered:
//!
//! - **Two-point routes** ([`PathFinder::route`])
//! - **Waypoint chains** visiting intermediate stops in order
//!   ([`PathFinder::route_via`])
//! - **Cost modes** ([`CostMode`]): plain costs, or costs biased toward
//!   fewer cells by a radial gradient around the start
//!
//! [`PathFinderAlgorithm`] implements [`PathFinder`] with Dijkstra's
//! algorithm over a cost-bucketed frontier. Every call allocates its own
//! search state; the finder is a stateless value.
//!
//! ```
//! use trailmap_core::{Coordinate, TerrainMap};
//! use trailmap_paths::{CostMode, PathFinder, PathFinderAlgorithm};
//!
//! let mut map = TerrainMap::new(3, 3);
//! map.get_mut(Coordinate::new(1, 1)).unwrap().set_obstacle(true);
//!
//! let route = PathFinderAlgorithm::new()
//!     .route(&map, Coordinate::new(0, 0), Coordinate::new(2, 2), CostMode::CostsOnly)
//!     .unwrap();
//! assert_eq!(route.len(), 5);
//! assert!(!route.contains(&Coordinate::new(1, 1)));
//! ```

mod algorithm;
mod cost;
mod cost_mode;
mod error;
mod frontier;
mod search;
mod traits;

pub use algorithm::PathFinderAlgorithm;
pub use cost::{is_walkable_path, path_cost};
pub use cost_mode::{CostMode, UnknownCostMode};
pub use error::{EndpointFault, RouteError};
pub use traits::PathFinder;
