use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which cost a route minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CostMode {
    /// Plain sum of the costs of the entered cells.
    #[default]
    CostsOnly,
    /// Costs scaled by distance from the start (see
    /// [`TerrainMap::with_radial_gradient`](trailmap_core::TerrainMap::with_radial_gradient))
    /// before searching. This biases routes toward fewer cells; it is a
    /// heuristic, not a guaranteed optimum of either measure.
    CostsAndNumberPoints,
}

impl CostMode {
    /// All modes, in declaration order.
    pub const ALL: [CostMode; 2] = [CostMode::CostsOnly, CostMode::CostsAndNumberPoints];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::CostsOnly => "costs",
            Self::CostsAndNumberPoints => "costs-and-points",
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized [`CostMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cost mode \u{201c}{0}\u{201d} (expected \u{201c}costs\u{201d} or \u{201c}costs-and-points\u{201d})")]
pub struct UnknownCostMode(pub String);

impl FromStr for CostMode {
    type Err = UnknownCostMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CostMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCostMode(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialized_names() {
        let json = serde_json::to_string(&CostMode::CostsAndNumberPoints).unwrap();
        assert_eq!(json, "\"costs-and-number-points\"");
        let back: CostMode = serde_json::from_str("\"costs-only\"").unwrap();
        assert_eq!(back, CostMode::CostsOnly);
    }
}
