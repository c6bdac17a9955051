//! **trailmap-core** — terrain model for least-cost grid routing.
//!
//! This crate provides the value types the router works on: grid
//! coordinates and bounds, named materials with a traversal cost and an
//! obstacle flag, the [`TerrainMap`] grid with its radial-gradient cost
//! transform, and text parsing for coordinates and ASCII layouts.

pub mod config;
pub mod error;
pub mod geom;
pub mod material;
pub mod parse;
pub mod terrain;

pub use config::TerrainConfig;
pub use error::{LayoutError, MapError, ParseError};
pub use geom::{Coordinate, Range, euclidean_floor, manhattan};
pub use material::Material;
pub use parse::{parse_coordinate, parse_coordinate_in};
pub use terrain::TerrainMap;
