//! Scene construction utilities
//!
//! This module provides a fluent API for building the snowball arena.

mod scene_builder;

pub use scene_builder::{Scene, SceneBuilder};
