//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shape tessellation and upload
//! - Frame rendering

use std::sync::Arc;

use sandbox2d_core::DrawList;
use sandbox2d_render::{context::RenderContext, tessellate, ContextError, ShapePipeline};
use winit::window::Window;

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ShapePipeline,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `scene_size` is the pixel area shapes are laid out in; it is stretched
    /// over the whole surface.
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        scene_size: (u32, u32),
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.set_screen_size(&context.queue, scene_size.0, scene_size.1);

        log::info!(
            "Renderer ready: surface {}x{}, scene {}x{}",
            context.size.width,
            context.size.height,
            scene_size.0,
            scene_size.1
        );

        Ok(Self {
            context,
            pipeline,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Render a single frame of recorded shapes
    pub fn render_frame(&mut self, draw_list: &DrawList) -> Result<(), RenderError> {
        let vertices = tessellate(draw_list);
        self.pipeline
            .upload(&self.context.device, &self.context.queue, &vertices);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface at its current size
    pub fn recover_surface(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "GPU setup failed: No suitable GPU adapter"
        );
    }
}
