//! 2D physics layer for the sandbox
//!
//! This crate wraps rapier2d with the pieces shapes are built from:
//! - Pixel/meter coordinate conversion with a Y flip
//! - Collision groups and contact reporting
//! - Material properties for dynamic bodies
//! - A world where every body carries exactly one fixture

pub mod body;
pub mod collision;
pub mod material;
pub mod units;
pub mod world;

// Re-export commonly used types
pub use body::{BodyHandle, Motion, MotionKind, SURFACE_FRICTION};
pub use collision::{CollisionFilter, CollisionGroup, ContactInfo};
pub use material::CollisionInfo;
pub use units::{flip_y_velocity, ScreenSpace};
pub use world::{PhysicsConfig, PhysicsWorld};

pub use rapier2d::math::{Point, Real, Vector};
pub use rapier2d::prelude::{
    Collider, ColliderBuilder, ColliderHandle, RigidBody, RigidBodyHandle,
};
