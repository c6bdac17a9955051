//! Construction parameters for a [`TerrainMap`](crate::TerrainMap).

use crate::material::Material;

/// Configuration for building a new terrain map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainConfig {
    pub width: i32,
    pub height: i32,
    /// Material every cell starts with.
    pub default_material: Material,
}

impl TerrainConfig {
    /// A `width × height` config using [`Material::default`].
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            default_material: Material::default(),
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = TerrainConfig {
            width: 7,
            height: 3,
            default_material: Material::ground("sand", 2),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TerrainConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: TerrainConfig = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(cfg.width, 4);
        assert_eq!(cfg.height, 10);
        assert_eq!(cfg.default_material, Material::default());
    }
}
