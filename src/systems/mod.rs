//! Application systems
//!
//! Window, simulation pacing and rendering, kept out of main.rs so each can
//! be tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
