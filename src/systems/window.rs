//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use winit::{event_loop::ActiveEventLoop, window::Window};

use crate::config::WindowConfig;
use crate::game::GameState;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Show the game state in the title
    pub fn update_title(&self, state: GameState, snowballs_left: usize, fps: u32) {
        self.window
            .set_title(&format_title(&self.base_title, state, snowballs_left, fps));
    }
}

fn format_title(base: &str, state: GameState, snowballs_left: usize, fps: u32) -> String {
    match state {
        GameState::Waiting => format!(
            "{} - {} snowballs [Enter to start, D to pop]",
            base, snowballs_left
        ),
        GameState::Running { frames_left } => format!(
            "{} - {} snowballs - {:.1}s left",
            base,
            snowballs_left,
            frames_left as f32 / fps.max(1) as f32
        ),
        GameState::Won => format!("{} - You live!", base),
        GameState::Lost => format!("{} - You die", base),
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
