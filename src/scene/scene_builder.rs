//! SceneBuilder - Declarative arena construction
//!
//! Provides a fluent API for filling a physics world with registered shapes.

use rand::Rng;
use sandbox2d_core::{
    Circle, CollisionGroup, CollisionInfo, Colour, Line, Motion, PhysicsConfig, PhysicsWorld,
    Shape, ShapeError, ShapeKey, ShapeRegistry, Vector,
};

use crate::config::{AppConfig, GameConfig};

/// A built arena: the world, its shapes and which of them are which
pub struct Scene {
    pub world: PhysicsWorld,
    pub registry: ShapeRegistry,
    /// Arena boundary, in creation order
    pub walls: Vec<ShapeKey>,
    /// Snowballs, oldest first
    pub snowballs: Vec<ShapeKey>,
}

/// Builder for the snowball arena
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(PhysicsConfig::default())
///     .add_walls(900.0, 600.0, 10.0, Colour::new(255, 150, 100, 255))?
///     .add_snowballs(&mut rand::rng(), 500, 10.0, [100.0, 500.0], 20.0)?
///     .with_collision_group(CollisionGroup::DEFAULT, CollisionGroup::ALL)
///     .build();
/// ```
pub struct SceneBuilder {
    world: PhysicsWorld,
    registry: ShapeRegistry,
    walls: Vec<ShapeKey>,
    snowballs: Vec<ShapeKey>,
}

impl SceneBuilder {
    /// Create a builder over an empty world
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            world: PhysicsWorld::with_config(config),
            registry: ShapeRegistry::new(),
            walls: Vec::new(),
            snowballs: Vec::new(),
        }
    }

    /// The full game arena described by the config
    pub fn from_config<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Result<Scene, ShapeError> {
        let GameConfig {
            snowball_count,
            snowball_radius,
            spawn_x,
            spawn_y,
            wall_inset,
            wall_colour,
            ..
        } = config.game;

        let scene = Self::new(config.physics_config())
            .add_walls(
                config.window.width as f32,
                config.window.height as f32,
                wall_inset,
                Colour(wall_colour),
            )?
            .add_snowballs(rng, snowball_count, snowball_radius, spawn_x, spawn_y)?
            .with_collision_group(CollisionGroup::DEFAULT, CollisionGroup::ALL)
            .build();

        log::info!(
            "Built arena with {} walls and {} snowballs",
            scene.walls.len(),
            scene.snowballs.len()
        );
        Ok(scene)
    }

    /// Add four static lines inset from the window edges
    pub fn add_walls(
        mut self,
        width: f32,
        height: f32,
        inset: f32,
        colour: Colour,
    ) -> Result<Self, ShapeError> {
        let (left, top) = (inset, inset);
        let (right, bottom) = (width - inset, height - inset);
        let corners = [
            Vector::new(left, top),
            Vector::new(right, top),
            Vector::new(right, bottom),
            Vector::new(left, bottom),
        ];

        for i in 0..corners.len() {
            let a = corners[i];
            let b = corners[(i + 1) % corners.len()];
            let wall = Line::new(&mut self.world, a, b, Motion::Static, colour)?;
            self.walls.push(self.registry.spawn(wall));
        }

        Ok(self)
    }

    /// Drop `count` white dynamic snowballs at random x along a row
    pub fn add_snowballs<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        count: usize,
        radius: f32,
        spawn_x: [f32; 2],
        spawn_y: f32,
    ) -> Result<Self, ShapeError> {
        let (min_x, max_x) = (spawn_x[0].min(spawn_x[1]), spawn_x[0].max(spawn_x[1]));

        self.snowballs.reserve(count);
        for _ in 0..count {
            let x = rng.random_range(min_x..=max_x).round();
            let ball = Circle::new_dynamic(
                &mut self.world,
                Vector::new(x, spawn_y),
                radius,
                CollisionInfo::SNOW,
            )?;
            self.snowballs.push(self.registry.spawn(ball));
        }

        Ok(self)
    }

    /// Put every shape added so far into `group`, colliding with `collides_with`
    pub fn with_collision_group(
        mut self,
        group: CollisionGroup,
        collides_with: CollisionGroup,
    ) -> Self {
        for key in self.walls.iter().chain(&self.snowballs) {
            if let Some(shape) = self.registry.get(*key) {
                shape.set_collision_group(&mut self.world, group, collides_with);
            }
        }
        self
    }

    /// Finish building
    pub fn build(self) -> Scene {
        Scene {
            world: self.world,
            registry: self.registry,
            walls: self.walls,
            snowballs: self.snowballs,
        }
    }
}
