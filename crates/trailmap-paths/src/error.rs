//! Route request errors.

use std::fmt;

use thiserror::Error;
use trailmap_core::Coordinate;

/// Why a coordinate cannot be a route endpoint or waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointFault {
    /// Outside the map.
    OutsideMap,
    /// On an obstacle cell.
    Obstacle,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideMap => f.write_str("outside the map"),
            Self::Obstacle => f.write_str("on an obstacle"),
        }
    }
}

/// A route request that could not be searched at all.
///
/// A search that runs but finds nothing is not an error: it returns an
/// empty route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route endpoint {at}: {reason}")]
    InvalidEndpoint { at: Coordinate, reason: EndpointFault },
}

impl RouteError {
    /// The offending coordinate.
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::InvalidEndpoint { at, .. } => *at,
        }
    }
}
