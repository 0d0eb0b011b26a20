//! Physics world and simulation
//!
//! Wraps the rapier2d body, fixture and solver sets behind the one-body,
//! one-fixture model shapes are built on.

use std::num::NonZeroUsize;

use crate::body::{BodyHandle, Motion};
use crate::collision::ContactInfo;
use crate::units::ScreenSpace;
use rapier2d::math::{Real, Vector};
use rapier2d::prelude::*;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration in m/s² (negative Y = down)
    pub gravity: [Real; 2],
    /// Seconds advanced by each call to [`PhysicsWorld::step`]
    pub timestep: Real,
    /// Solver iterations per step
    pub solver_iterations: usize,
    /// Whether resting bodies may fall asleep
    pub allow_sleep: bool,
    /// Pixel scale and screen height used at the shape boundary
    pub screen: ScreenSpace,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -10.0],
            timestep: 1.0 / 60.0,
            solver_iterations: 10,
            allow_sleep: true,
            screen: ScreenSpace::default(),
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity and default stepping
    pub fn new(gravity: [Real; 2]) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    /// Set the screen space used for coordinate conversion
    pub fn with_screen(mut self, screen: ScreenSpace) -> Self {
        self.screen = screen;
        self
    }

    /// Set the step length from a frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.timestep = 1.0 / fps.max(1) as Real;
        self
    }

    fn integration_parameters(&self) -> IntegrationParameters {
        IntegrationParameters {
            dt: self.timestep,
            num_solver_iterations: NonZeroUsize::new(self.solver_iterations)
                .unwrap_or(NonZeroUsize::MIN),
            ..Default::default()
        }
    }
}

/// The physics world containing every body and fixture
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    query_pipeline: QueryPipeline,
    /// Physics configuration
    config: PhysicsConfig,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: Vector::new(config.gravity[0], config.gravity[1]),
            integration_parameters: config.integration_parameters(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            config,
        }
    }

    /// The configuration this world was built with
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Screen space every shape converts through
    pub fn screen(&self) -> &ScreenSpace {
        &self.config.screen
    }

    /// Create a body at `translation` (meters) with exactly one fixture
    ///
    /// The fixture's material comes from `motion` for dynamic bodies; static
    /// and kinematic fixtures keep the engine defaults.
    pub fn create_body(
        &mut self,
        translation: Vector<Real>,
        motion: Motion,
        fixture: ColliderBuilder,
    ) -> BodyHandle {
        let body = motion
            .body_builder()
            .translation(translation)
            .can_sleep(self.config.allow_sleep)
            .build();
        let body = self.bodies.insert(body);

        let collider = motion.apply_material(fixture).build();
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        log::trace!("Created {:?} body {:?}", motion.kind(), body);
        BodyHandle {
            body,
            collider,
            kind: motion.kind(),
        }
    }

    /// Destroy a body and its fixture
    ///
    /// Returns false if the body was already gone.
    pub fn destroy_body(&mut self, handle: BodyHandle) -> bool {
        let removed = self.bodies.remove(
            handle.body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        if removed.is_some() {
            log::trace!("Destroyed body {:?}", handle.body);
        }
        removed.is_some()
    }

    /// Whether the body behind `handle` still exists
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.body)
    }

    /// Get an immutable reference to a body
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.body)
    }

    /// Get a mutable reference to a body
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle.body)
    }

    /// The single fixture of a body
    ///
    /// # Panics
    /// If the body carries anything other than exactly one fixture.
    pub fn fixture(&self, handle: BodyHandle) -> Option<&Collider> {
        let body = self.bodies.get(handle.body)?;
        assert_single_fixture(body);
        self.colliders.get(body.colliders()[0])
    }

    /// Mutable access to the single fixture of a body
    ///
    /// # Panics
    /// If the body carries anything other than exactly one fixture.
    pub fn fixture_mut(&mut self, handle: BodyHandle) -> Option<&mut Collider> {
        let body = self.bodies.get(handle.body)?;
        assert_single_fixture(body);
        let collider = body.colliders()[0];
        self.colliders.get_mut(collider)
    }

    /// Attach another fixture to an existing body
    ///
    /// Shapes never do this; it exists so a body can be put in a state the
    /// fixture accessors refuse.
    pub fn attach_fixture(&mut self, handle: BodyHandle, fixture: ColliderBuilder) -> ColliderHandle {
        self.colliders
            .insert_with_parent(fixture.build(), handle.body, &mut self.bodies)
    }

    /// Step the physics simulation forward by one configured timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Contact pairs known to the narrow phase
    ///
    /// Pairs whose fixtures were destroyed since the last step are skipped.
    pub fn contacts(&self) -> Vec<ContactInfo> {
        self.narrow_phase
            .contact_pairs()
            .filter(|pair| {
                self.colliders.contains(pair.collider1) && self.colliders.contains(pair.collider2)
            })
            .map(|pair| ContactInfo {
                collider1: pair.collider1,
                collider2: pair.collider2,
                touching: pair.has_any_active_contact,
            })
            .collect()
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the number of fixtures in the world
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

fn assert_single_fixture(body: &RigidBody) {
    assert_eq!(
        body.colliders().len(),
        1,
        "shape body must have exactly one fixture"
    );
}
