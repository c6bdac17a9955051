//! The [`TerrainMap`] type — a 2D grid of [`Material`]s.
//!
//! Unlike a view over shared storage, a `TerrainMap` owns its cells
//! outright: cloning copies the grid, and derived maps such as
//! [`with_radial_gradient`](TerrainMap::with_radial_gradient) never alias
//! the source.

use crate::config::TerrainConfig;
use crate::error::MapError;
use crate::geom::{Coordinate, Range, RangeIter, euclidean_floor};
use crate::material::Material;

/// A rectangular grid of materials, indexed by [`Coordinate`].
///
/// Every cell always holds a material; operations that could leave a cell
/// empty are rejected with [`MapError::NullMaterial`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    cells: Vec<Material>,
    bounds: Range,
}

impl TerrainMap {
    /// Create a `width × height` map filled with [`Material::default`]
    /// (cost 1, walkable). A zero or negative size gives an empty 0×0 map.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Material::default())
    }

    /// Create a map with every cell set to a copy of `material`.
    pub fn filled(width: i32, height: i32, material: Material) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            cells: vec![material; bounds.len()],
            bounds,
        }
    }

    /// Assemble a map from row-major cells. `cells.len()` must equal
    /// `bounds.len()`.
    pub(crate) fn from_cells(bounds: Range, cells: Vec<Material>) -> Self {
        debug_assert_eq!(cells.len(), bounds.len());
        Self { cells, bounds }
    }

    /// Create a map from a [`TerrainConfig`].
    pub fn from_config(config: &TerrainConfig) -> Self {
        Self::filled(config.width, config.height, config.default_material.clone())
    }

    /// The bounding range, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Coordinate) -> bool {
        self.bounds.contains(p)
    }

    /// All cells in row-major order; index with [`Range::index`] on
    /// [`bounds`](Self::bounds).
    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }

    fn index(&self, at: Coordinate) -> Result<usize, MapError> {
        self.bounds.index(at).ok_or(MapError::OutOfBounds {
            at,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The material at `at`.
    pub fn get(&self, at: Coordinate) -> Result<&Material, MapError> {
        let i = self.index(at)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the material at `at`, for editing a cell in place.
    pub fn get_mut(&mut self, at: Coordinate) -> Result<&mut Material, MapError> {
        let i = self.index(at)?;
        Ok(&mut self.cells[i])
    }

    /// Store `material` at `at`.
    ///
    /// Accepts a [`Material`] or an `Option<Material>`; `None` is rejected
    /// with [`MapError::NullMaterial`] and leaves the cell as it was.
    pub fn set(
        &mut self,
        at: Coordinate,
        material: impl Into<Option<Material>>,
    ) -> Result<(), MapError> {
        let i = self.index(at)?;
        let material = material.into().ok_or(MapError::NullMaterial { at })?;
        self.cells[i] = material;
        Ok(())
    }

    /// Replace the whole grid. `rows` is indexed `[y][x]`; the map takes
    /// the dimensions of the replacement.
    ///
    /// The swap is all-or-nothing: on error the map is unchanged.
    pub fn replace_all(&mut self, rows: Vec<Vec<Option<Material>>>) -> Result<(), MapError> {
        let expected = rows.first().map_or(0, Vec::len);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(MapError::RaggedGrid {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            if let Some(x) = row.iter().position(Option::is_none) {
                return Err(MapError::NullMaterial {
                    at: Coordinate::new(x as i32, y as i32),
                });
            }
        }

        let bounds = Range::sized(expected as i32, rows.len() as i32);
        self.cells = rows.into_iter().flatten().flatten().collect();
        self.bounds = bounds;
        Ok(())
    }

    /// Return a new map of the same size whose costs grow with distance
    /// from `origin`.
    ///
    /// Each cell's cost is multiplied by `floor(sqrt(dx² + dy²))`, its
    /// truncated Euclidean distance to `origin`; names and obstacle flags
    /// are kept. The origin cell therefore always ends up with cost 0.
    /// `self` is not modified.
    pub fn with_radial_gradient(&self, origin: Coordinate) -> TerrainMap {
        let cells = self
            .iter()
            .map(|(p, m)| {
                let distance = euclidean_floor(p, origin);
                let mut scaled = m.clone();
                scaled.set_cost(i64::from(m.cost()).saturating_mul(i64::from(distance)));
                scaled
            })
            .collect();
        log::debug!(
            "radial gradient from {origin} over {}x{} map",
            self.width(),
            self.height()
        );
        TerrainMap {
            cells,
            bounds: self.bounds,
        }
    }

    /// Row-major iterator over every coordinate of the map.
    #[inline]
    pub fn coordinates(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Row-major iterator over `(Coordinate, &Material)` pairs.
    pub fn iter(&self) -> TerrainIter<'_> {
        TerrainIter {
            cells: self.cells.iter(),
            coords: self.bounds.iter(),
        }
    }
}

/// Iterator over `(Coordinate, &Material)` pairs in a [`TerrainMap`].
pub struct TerrainIter<'a> {
    cells: std::slice::Iter<'a, Material>,
    coords: RangeIter,
}

impl<'a> Iterator for TerrainIter<'a> {
    type Item = (Coordinate, &'a Material);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.coords.next()?, self.cells.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for TerrainIter<'_> {}

impl<'a> IntoIterator for &'a TerrainMap {
    type Item = (Coordinate, &'a Material);
    type IntoIter = TerrainIter<'a>;

    fn into_iter(self) -> TerrainIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(map: &TerrainMap) -> Vec<u32> {
        map.cells().iter().map(Material::cost).collect()
    }

    #[test]
    fn new_fills_with_default() {
        let m = TerrainMap::new(4, 3);
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert_eq!(m.len(), 12);
        assert!(m.iter().all(|(_, mat)| *mat == Material::default()));
    }

    #[test]
    fn from_config_uses_default_material() {
        let cfg = TerrainConfig {
            width: 2,
            height: 2,
            default_material: Material::ground("grass", 3),
        };
        let m = TerrainMap::from_config(&cfg);
        assert_eq!(costs(&m), vec![3; 4]);
        assert_eq!(m.get(Coordinate::new(1, 1)).unwrap().name(), "grass");
    }

    #[test]
    fn get_out_of_bounds() {
        let m = TerrainMap::new(3, 3);
        for p in [
            Coordinate::new(3, 0),
            Coordinate::new(0, 3),
            Coordinate::new(-1, 0),
        ] {
            assert_eq!(
                m.get(p),
                Err(MapError::OutOfBounds {
                    at: p,
                    width: 3,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn set_and_get() {
        let mut m = TerrainMap::new(3, 3);
        let p = Coordinate::new(2, 1);
        m.set(p, Material::wall("rock")).unwrap();
        assert!(m.get(p).unwrap().is_obstacle());
        assert!(!m.get(Coordinate::new(1, 2)).unwrap().is_obstacle());
    }

    #[test]
    fn set_rejects_missing_material() {
        let mut m = TerrainMap::new(2, 2);
        let p = Coordinate::new(1, 1);
        assert_eq!(m.set(p, None), Err(MapError::NullMaterial { at: p }));
        assert_eq!(*m.get(p).unwrap(), Material::default());
        assert!(matches!(
            m.set(Coordinate::new(5, 5), Material::default()),
            Err(MapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn edit_in_place() {
        let mut m = TerrainMap::new(2, 2);
        let p = Coordinate::new(0, 1);
        let cell = m.get_mut(p).unwrap();
        cell.set_cost(9);
        cell.set_obstacle(true);
        assert_eq!(m.get(p).unwrap().cost(), 9);
        assert!(m.get(p).unwrap().is_obstacle());
    }

    #[test]
    fn replace_all_swaps_grid() {
        let mut m = TerrainMap::new(2, 2);
        let rows = vec![
            vec![
                Some(Material::ground("a", 1)),
                Some(Material::ground("b", 2)),
                Some(Material::ground("c", 3)),
            ],
            vec![
                Some(Material::ground("d", 4)),
                Some(Material::wall("e")),
                Some(Material::ground("f", 6)),
            ],
        ];
        m.replace_all(rows).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.get(Coordinate::new(2, 0)).unwrap().name(), "c");
        assert!(m.get(Coordinate::new(1, 1)).unwrap().is_obstacle());
    }

    #[test]
    fn replace_all_rejects_empty_cell() {
        let mut m = TerrainMap::new(2, 2);
        let before = m.clone();
        let rows = vec![
            vec![Some(Material::default()), Some(Material::default())],
            vec![Some(Material::default()), None],
        ];
        assert_eq!(
            m.replace_all(rows),
            Err(MapError::NullMaterial {
                at: Coordinate::new(1, 1)
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn replace_all_with_empty_rows_gives_empty_map() {
        let mut m = TerrainMap::new(2, 2);
        m.replace_all(vec![vec![]; 3]).unwrap();
        assert!(m.is_empty());
        assert_eq!((m.width(), m.height()), (0, 0));
        assert_eq!(m, TerrainMap::new(0, 0));
        assert_eq!(m, TerrainMap::new(0, 7));
        assert!(m.get(Coordinate::new(0, 0)).is_err());
    }

    #[test]
    fn replace_all_rejects_ragged_rows() {
        let mut m = TerrainMap::new(2, 2);
        let rows = vec![
            vec![Some(Material::default()), Some(Material::default())],
            vec![Some(Material::default())],
        ];
        assert_eq!(
            m.replace_all(rows),
            Err(MapError::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(m.width(), 2);
    }

    #[test]
    fn radial_gradient_formula() {
        let mut m = TerrainMap::new(4, 4);
        m.get_mut(Coordinate::new(3, 3)).unwrap().set_cost(5);
        m.set(Coordinate::new(0, 2), Material::wall("rock")).unwrap();
        let origin = Coordinate::new(0, 0);
        let g = m.with_radial_gradient(origin);

        for (p, mat) in g.iter() {
            let before = m.get(p).unwrap();
            assert_eq!(mat.cost(), before.cost() * euclidean_floor(p, origin));
            assert_eq!(mat.is_obstacle(), before.is_obstacle());
            assert_eq!(mat.name(), before.name());
        }
        assert_eq!(g.get(origin).unwrap().cost(), 0);
        // floor(sqrt(18)) = 4, times 5
        assert_eq!(g.get(Coordinate::new(3, 3)).unwrap().cost(), 20);
        assert_eq!(g.get(Coordinate::new(1, 1)).unwrap().cost(), 1);
    }

    #[test]
    fn radial_gradient_leaves_source_untouched() {
        let m = TerrainMap::new(3, 3);
        let before = m.clone();
        let g = m.with_radial_gradient(Coordinate::new(1, 1));
        assert_eq!(m, before);
        assert_eq!(g.get(Coordinate::new(1, 1)).unwrap().cost(), 0);
        assert_eq!(g.bounds(), m.bounds());
    }

    #[test]
    fn iter_is_row_major() {
        let mut m = TerrainMap::new(3, 2);
        m.get_mut(Coordinate::new(1, 0)).unwrap().set_cost(5);
        let items: Vec<_> = m.iter().map(|(p, mat)| (p, mat.cost())).collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Coordinate::new(1, 0), 5));
        assert_eq!(items[3].0, Coordinate::new(0, 1));
        assert_eq!(m.coordinates().count(), 6);
    }
}
