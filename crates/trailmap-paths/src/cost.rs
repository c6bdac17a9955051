use trailmap_core::{Coordinate, MapError, TerrainMap};

/// Total cost of walking `path`: the cost of every cell entered after the
/// first. Empty and single-cell paths cost 0.
///
/// Adjacency and obstacles are not checked; see [`is_walkable_path`].
pub fn path_cost(map: &TerrainMap, path: &[Coordinate]) -> Result<u64, MapError> {
    if let Some(&first) = path.first() {
        map.get(first)?;
    }
    path.iter().skip(1).try_fold(0u64, |sum, &p| {
        Ok(sum.saturating_add(u64::from(map.get(p)?.cost())))
    })
}

/// Whether every cell of `path` is inside `map`, walkable, and one
/// cardinal step from the previous cell.
pub fn is_walkable_path(map: &TerrainMap, path: &[Coordinate]) -> bool {
    let cells_ok = path
        .iter()
        .all(|&p| map.get(p).is_ok_and(|m| !m.is_obstacle()));
    cells_ok && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
