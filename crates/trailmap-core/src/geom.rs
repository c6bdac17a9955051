//! Geometry primitives: [`Coordinate`] and [`Range`].
//!
//! X grows right, Y grows down. A [`Range`] is the half-open rectangle a
//! terrain map occupies; iteration over it is row-major.

use std::fmt;

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A grid cell position.
///
/// Coordinates are plain values: there are no setters, build a new one
/// instead. Negative components are representable but never lie inside a
/// map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours (up, right, down, left).
    ///
    /// Bounds are not checked; filter with [`Range::contains`].
    #[inline]
    pub fn neighbors_4(self) -> [Coordinate; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        manhattan(self, other) == 1
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> u64 {
    let dx = (i64::from(a.x) - i64::from(b.x)).unsigned_abs();
    let dy = (i64::from(a.y) - i64::from(b.y)).unsigned_abs();
    dx + dy
}

/// Euclidean distance truncated toward zero: `floor(sqrt(dx² + dy²))`.
///
/// Exact for every pair of `i32` coordinates.
pub fn euclidean_floor(a: Coordinate, b: Coordinate) -> u32 {
    let dx = u128::from((i64::from(a.x) - i64::from(b.x)).unsigned_abs());
    let dy = u128::from((i64::from(a.y) - i64::from(b.y)).unsigned_abs());
    let sq = dx * dx + dy * dy;
    let mut r = (sq as f64).sqrt() as u128;
    // Correct the float estimate so that r² <= sq < (r+1)².
    while r * r > sq {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= sq {
        r += 1;
    }
    u32::try_from(r).unwrap_or(u32::MAX)
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Coordinate::new(x0.min(x1), y0.min(y1)),
            max: Coordinate::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The range `[0, width) × [0, height)`. If either size is zero or
    /// negative the result is the empty range `Range::default()`.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            return Self::default();
        }
        Self::new(0, 0, width, height)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Coordinate) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major flat index of `p`, or `None` outside the range.
    #[inline]
    pub fn index(self, p: Coordinate) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coordinate;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coordinate,
}

impl Iterator for RangeIter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
