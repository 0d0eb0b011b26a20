//! Physical material properties for dynamic shapes

use rapier2d::math::Real;
use serde::{Deserialize, Serialize};

/// Material properties used to build the fixture of a dynamic shape
///
/// Only read at construction time. Later changes go through the shape's live
/// fixture. Values are conventionally in [0, 1] but are not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionInfo {
    /// Mass per unit area
    pub density: Real,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: Real,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: Real,
}

impl Default for CollisionInfo {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.0,
            restitution: 1.0,
        }
    }
}

impl CollisionInfo {
    /// Packed snow: grippy and fully elastic
    pub const SNOW: Self = Self {
        density: 1.0,
        friction: 1.0,
        restitution: 1.0,
    };

    /// Create a new material
    pub fn new(density: Real, friction: Real, restitution: Real) -> Self {
        Self {
            density,
            friction,
            restitution,
        }
    }

    /// Set the density
    pub fn with_density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Set the friction
    pub fn with_friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set the restitution
    pub fn with_restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }
}
