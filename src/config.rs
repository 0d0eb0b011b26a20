//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SB2D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use sandbox2d_physics::{PhysicsConfig, ScreenSpace};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsSettings,
    /// Snowball game configuration
    #[serde(default)]
    pub game: GameConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SB2D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SB2D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SB2D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Engine configuration for this window and frame rate
    pub fn physics_config(&self) -> PhysicsConfig {
        self.physics
            .to_physics_config(self.window.height)
            .with_fps(self.game.target_fps)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snowball Sandbox".to_string(),
            width: 900,
            height: 600,
            vsync: true,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSettings {
    /// Gravity in m/s² (negative Y = down)
    pub gravity: [f32; 2],
    /// Screen pixels per simulation meter
    pub pixels_per_meter: f32,
    /// Solver iterations per step
    pub solver_iterations: usize,
    /// Whether resting bodies may fall asleep
    pub allow_sleep: bool,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, -10.0],
            pixels_per_meter: 20.0,
            solver_iterations: 10,
            allow_sleep: true,
        }
    }
}

impl PhysicsSettings {
    /// Build the engine config for a window of the given pixel height
    pub fn to_physics_config(&self, window_height: u32) -> PhysicsConfig {
        PhysicsConfig {
            solver_iterations: self.solver_iterations,
            allow_sleep: self.allow_sleep,
            ..PhysicsConfig::new(self.gravity)
        }
        .with_screen(ScreenSpace::new(self.pixels_per_meter, window_height as f32))
    }
}

/// Snowball game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Frames per second; also the physics step rate
    pub target_fps: u32,
    /// Seconds the player has once the game starts
    pub countdown_seconds: u32,
    /// Number of snowballs dropped into the arena
    pub snowball_count: usize,
    /// Snowball radius in pixels
    pub snowball_radius: f32,
    /// Horizontal spawn range in pixels [min, max]
    pub spawn_x: [f32; 2],
    /// Spawn height in pixels
    pub spawn_y: f32,
    /// Distance of the arena walls from the window edges in pixels
    pub wall_inset: f32,
    /// Wall colour [r, g, b, a]
    pub wall_colour: [u8; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            countdown_seconds: 5,
            snowball_count: 500,
            snowball_radius: 10.0,
            spawn_x: [100.0, 500.0],
            spawn_y: 20.0,
            wall_inset: 10.0,
            wall_colour: [255, 150, 100, 255],
        }
    }
}

impl GameConfig {
    /// Frames the countdown starts from
    pub fn countdown_frames(&self) -> u32 {
        self.target_fps * self.countdown_seconds
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Report touching shape pairs after every step
    pub log_contacts: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_contacts: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
