//! Snowball sandbox
//!
//! A 2D physics playground: shapes on a rapier2d world, drawn with wgpu,
//! with a countdown game on top.
//!
//! - [`config`] - Layered TOML/env configuration
//! - [`scene`] - Arena construction
//! - [`game`] - The countdown game and per-frame input
//! - [`sandbox`] - World, shapes and game bundled for the frame loop
//! - [`systems`] - Window, simulation pacing and rendering

pub mod config;
pub mod game;
pub mod input;
pub mod sandbox;
pub mod scene;
pub mod systems;

pub use game::{FrameInput, GameState, SnowballGame};
pub use sandbox::Sandbox;
