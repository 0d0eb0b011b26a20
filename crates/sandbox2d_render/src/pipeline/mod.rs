//! Shape rendering pipeline

pub mod shape_pipeline;
pub mod types;

pub use shape_pipeline::ShapePipeline;
pub use types::{ScreenUniforms, Vertex2D};
