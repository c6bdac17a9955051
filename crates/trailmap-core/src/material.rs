//! The [`Material`] type — what a terrain cell is made of.

use std::fmt;

/// Name given to the material every new map is filled with.
pub const DEFAULT_MATERIAL_NAME: &str = "default";

/// A named terrain descriptor: traversal cost and obstacle flag.
///
/// The cost of a material is what a route pays for *entering* a cell made
/// of it. It is never negative: [`set_cost`](Self::set_cost) clamps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    name: String,
    cost: u32,
    obstacle: bool,
}

impl Material {
    /// Create a new material. Negative costs clamp to 0.
    pub fn new(name: impl Into<String>, cost: i64, obstacle: bool) -> Self {
        Self {
            name: name.into(),
            cost: clamp_cost(cost),
            obstacle,
        }
    }

    /// A walkable material with the given cost.
    pub fn ground(name: impl Into<String>, cost: i64) -> Self {
        Self::new(name, cost, false)
    }

    /// An impassable material. Its cost is irrelevant to routing and set to 1.
    pub fn wall(name: impl Into<String>) -> Self {
        Self::new(name, 1, true)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Cost of entering a cell of this material.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Set the cost. Negative input clamps to 0, input above `u32::MAX`
    /// saturates.
    #[inline]
    pub fn set_cost(&mut self, cost: i64) {
        self.cost = clamp_cost(cost);
    }

    /// Whether routes may never enter this material.
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    #[inline]
    pub fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    /// Set the cost (builder).
    #[inline]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.set_cost(cost);
        self
    }

    /// Set the obstacle flag (builder).
    #[inline]
    pub fn with_obstacle(mut self, obstacle: bool) -> Self {
        self.obstacle = obstacle;
        self
    }
}

impl Default for Material {
    /// Cost 1, walkable.
    fn default() -> Self {
        Self::new(DEFAULT_MATERIAL_NAME, 1, false)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.obstacle {
            write!(f, "{} (obstacle)", self.name)
        } else {
            write!(f, "{} (cost {})", self.name, self.cost)
        }
    }
}

#[inline]
fn clamp_cost(cost: i64) -> u32 {
    u32::try_from(cost.max(0)).unwrap_or(u32::MAX)
}
