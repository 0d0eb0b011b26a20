//! 2D shape rendering
//!
//! This crate turns a recorded [`DrawList`](sandbox2d_core::DrawList) into
//! triangles and draws them with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`tessellate::tessellate`] - Draw commands to pixel-space triangles
//! - [`pipeline::ShapePipeline`] - Alpha-blended triangle pipeline in pixel space

pub mod context;
pub mod pipeline;
pub mod tessellate;

pub use context::{ContextError, RenderContext};
pub use pipeline::{ScreenUniforms, ShapePipeline, Vertex2D};
pub use tessellate::{tessellate, CIRCLE_SEGMENTS};
