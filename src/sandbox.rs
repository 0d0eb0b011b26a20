//! Application context: the world, its shapes and the game played on them

use rand::Rng;
use sandbox2d_core::{Canvas, PhysicsWorld, ShapeError, ShapeRegistry};

use crate::config::AppConfig;
use crate::game::{FrameInput, GameState, SnowballGame};
use crate::scene::{Scene, SceneBuilder};

/// Everything one frame of the sandbox touches
pub struct Sandbox {
    world: PhysicsWorld,
    registry: ShapeRegistry,
    game: SnowballGame,
    log_contacts: bool,
}

impl Sandbox {
    /// Build the arena described by the config
    pub fn new<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<Self, ShapeError> {
        let scene = SceneBuilder::from_config(config, rng)?;
        Ok(Self::from_scene(
            scene,
            config.game.countdown_frames(),
            config.debug.log_contacts,
        ))
    }

    /// Wrap an already built scene
    pub fn from_scene(scene: Scene, countdown_frames: u32, log_contacts: bool) -> Self {
        let Scene {
            world,
            registry,
            walls,
            snowballs,
        } = scene;

        Self {
            world,
            registry,
            game: SnowballGame::new(countdown_frames, walls.len(), snowballs),
            log_contacts,
        }
    }

    /// Run game logic, then step physics and report contacts
    pub fn update(&mut self, input: &FrameInput) -> GameState {
        let state = self
            .game
            .update(input, &mut self.world, &mut self.registry);

        self.world.step();

        if self.log_contacts && log::log_enabled!(log::Level::Trace) {
            for (a, b) in self.registry.touching_pairs(&self.world) {
                log::trace!("Contact {:?} <-> {:?}", a, b);
            }
        }

        state
    }

    /// Draw every live shape
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.registry.draw_all(&self.world, canvas);
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn game(&self) -> &SnowballGame {
        &self.game
    }
}
