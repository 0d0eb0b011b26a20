//! Shapes for the 2D sandbox
//!
//! This crate layers drawable shapes over the physics world:
//!
//! - [`Shape`] - The common capability: pixel-space pose, velocity, groups
//! - [`Circle`], [`Rectangle`], [`Line`], [`Polygon`] - The concrete kinds
//! - [`Material`] - Live fixture material, handed out by dynamic shapes only
//! - [`ShapeRegistry`] - Owner of all shapes and the only path to destroy one
//! - [`Canvas`] / [`DrawList`] - Where shapes draw to

mod canvas;
mod colour;
mod error;
mod registry;
mod shape;
pub mod shapes;

pub use canvas::{Canvas, DrawCommand, DrawList};
pub use colour::Colour;
pub use error::ShapeError;
pub use registry::{ShapeKey, ShapeRegistry};
pub use shape::{Material, Shape};
pub use shapes::{Circle, Line, Polygon, Rectangle, LINE_WIDTH};

// Re-export physics types so callers can build shapes through one crate
pub use sandbox2d_physics::{
    CollisionGroup, CollisionInfo, Motion, MotionKind, PhysicsConfig, PhysicsWorld, Real,
    ScreenSpace, Vector,
};
