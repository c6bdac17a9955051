//! Error types for terrain-map access and text parsing.

use thiserror::Error;

use crate::geom::Coordinate;

/// Structural violations of a [`TerrainMap`](crate::TerrainMap) contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A coordinate lies outside the map.
    #[error("{at} is outside the {width}x{height} map")]
    OutOfBounds {
        at: Coordinate,
        width: i32,
        height: i32,
    },
    /// A cell was given no material.
    #[error("no material supplied for cell {at}")]
    NullMaterial { at: Coordinate },
    /// A replacement grid whose rows differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors from turning `"x,y"` text into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("use ',' to separate coordinates")]
    MissingSeparator,
    #[error("expected exactly two coordinates, found {0}")]
    WrongArity(usize),
    #[error("invalid coordinate value \u{201c}{0}\u{201d}")]
    InvalidNumber(String),
    #[error("{at} is not inside the {width}x{height} map")]
    OutsideMap {
        at: Coordinate,
        width: i32,
        height: i32,
    },
}

/// Errors from parsing an ASCII terrain layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Lines have different widths.
    #[error("layout line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no terrain meaning.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {at}")]
    InvalidChar { ch: char, at: Coordinate },
}
