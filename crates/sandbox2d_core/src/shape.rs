//! The shared capability of every physics-backed drawable
//!
//! Every accessor speaks pixel space (origin top-left, Y down). Conversion to
//! and from the engine's meters/Y-up space happens here and nowhere else.

use crate::canvas::Canvas;
use crate::colour::Colour;
use sandbox2d_physics::{
    BodyHandle, Collider, CollisionFilter, CollisionGroup, MotionKind, PhysicsWorld, Point, Real,
    RigidBody, Vector,
};

/// A physics body with exactly one fixture and a colour
///
/// Shapes hold a handle, not the body. The body lives in the [`PhysicsWorld`]
/// until the owning [`crate::ShapeRegistry`] deletes the shape.
pub trait Shape {
    /// Handle of the backing body and its fixture
    fn body(&self) -> BodyHandle;

    /// Colour used when drawing
    fn colour(&self) -> Colour;

    /// Change the drawing colour
    fn set_colour(&mut self, colour: Colour);

    /// Draw the shape at its current simulated pose
    ///
    /// Reads the world; never changes it.
    fn draw(&self, world: &PhysicsWorld, canvas: &mut dyn Canvas);

    /// Motion kind the shape was built with
    fn motion_kind(&self) -> MotionKind {
        self.body().kind()
    }

    /// Body origin in pixels
    fn position(&self, world: &PhysicsWorld) -> Vector<Real> {
        let body = rigid_body(world, self.body());
        world.screen().position_to_screen(*body.translation())
    }

    /// Teleport the body origin to a pixel position
    ///
    /// Bypasses the simulation. Kinematic shapes should be moved with
    /// [`Shape::set_velocity`] if they are meant to push others.
    fn set_position(&self, world: &mut PhysicsWorld, position: Vector<Real>) {
        let translation = world.screen().position_to_sim(position);
        rigid_body_mut(world, self.body()).set_translation(translation, true);
    }

    /// Linear velocity in pixels per second
    fn velocity(&self, world: &PhysicsWorld) -> Vector<Real> {
        let body = rigid_body(world, self.body());
        world.screen().velocity_to_screen(*body.linvel())
    }

    /// Set the linear velocity in pixels per second
    ///
    /// Static bodies ignore this.
    fn set_velocity(&self, world: &mut PhysicsWorld, velocity: Vector<Real>) {
        let linvel = world.screen().velocity_to_sim(velocity);
        rigid_body_mut(world, self.body()).set_linvel(linvel, true);
    }

    /// Angular velocity in radians per second (same in both spaces)
    fn angular_velocity(&self, world: &PhysicsWorld) -> Real {
        rigid_body(world, self.body()).angvel()
    }

    /// Set the angular velocity in radians per second
    fn set_angular_velocity(&self, world: &mut PhysicsWorld, angular_velocity: Real) {
        rigid_body_mut(world, self.body()).set_angvel(angular_velocity, true);
    }

    /// Choose the group this shape belongs to and the groups it accepts
    ///
    /// A pair only collides when each side accepts the other's group.
    fn set_collision_group(
        &self,
        world: &mut PhysicsWorld,
        group: CollisionGroup,
        collides_with: CollisionGroup,
    ) {
        let filter = CollisionFilter::new(group, collides_with);
        fixture_mut(world, self.body()).set_collision_groups(filter.interaction_groups());
    }

    /// Current collision filter of the fixture
    fn collision_filter(&self, world: &PhysicsWorld) -> CollisionFilter {
        CollisionFilter::from_interaction_groups(fixture(world, self.body()).collision_groups())
    }

    /// Material accessor, present only for dynamic shapes
    fn material(&self) -> Option<Material> {
        Material::for_body(self.body())
    }
}

/// Live density/friction/restitution of a dynamic shape's fixture
///
/// Only dynamic shapes hand one out; static and kinematic bodies have no
/// material to speak of. Like the shape accessors, every method panics once
/// the body has been destroyed outside the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Material {
    body: BodyHandle,
}

impl Material {
    fn for_body(body: BodyHandle) -> Option<Self> {
        body.kind().has_material().then_some(Self { body })
    }

    /// Mass per unit area
    pub fn density(&self, world: &PhysicsWorld) -> Real {
        fixture(world, self.body).density()
    }

    /// Change the density; the body's mass follows
    pub fn set_density(&self, world: &mut PhysicsWorld, density: Real) {
        fixture_mut(world, self.body).set_density(density);
    }

    /// Friction coefficient
    pub fn friction(&self, world: &PhysicsWorld) -> Real {
        fixture(world, self.body).friction()
    }

    /// Change the friction coefficient
    pub fn set_friction(&self, world: &mut PhysicsWorld, friction: Real) {
        fixture_mut(world, self.body).set_friction(friction);
    }

    /// Restitution (bounciness)
    pub fn restitution(&self, world: &PhysicsWorld) -> Real {
        fixture(world, self.body).restitution()
    }

    /// Change the restitution
    pub fn set_restitution(&self, world: &mut PhysicsWorld, restitution: Real) {
        fixture_mut(world, self.body).set_restitution(restitution);
    }
}

fn rigid_body(world: &PhysicsWorld, handle: BodyHandle) -> &RigidBody {
    match world.body(handle) {
        Some(body) => body,
        None => panic!("body {:?} destroyed outside the shape registry", handle.rigid_body()),
    }
}

fn rigid_body_mut(world: &mut PhysicsWorld, handle: BodyHandle) -> &mut RigidBody {
    match world.body_mut(handle) {
        Some(body) => body,
        None => panic!("body {:?} destroyed outside the shape registry", handle.rigid_body()),
    }
}

fn fixture(world: &PhysicsWorld, handle: BodyHandle) -> &Collider {
    match world.fixture(handle) {
        Some(fixture) => fixture,
        None => panic!("body {:?} destroyed outside the shape registry", handle.rigid_body()),
    }
}

fn fixture_mut(world: &mut PhysicsWorld, handle: BodyHandle) -> &mut Collider {
    match world.fixture_mut(handle) {
        Some(fixture) => fixture,
        None => panic!("body {:?} destroyed outside the shape registry", handle.rigid_body()),
    }
}

/// Body-local points (meters) to pixel positions at the body's current pose
pub(crate) fn local_to_screen(
    world: &PhysicsWorld,
    handle: BodyHandle,
    local: &[Point<Real>],
) -> Vec<[f32; 2]> {
    let pose = rigid_body(world, handle).position();
    local
        .iter()
        .map(|p| {
            let screen = world.screen().position_to_screen((pose * p).coords);
            [screen.x, screen.y]
        })
        .collect()
}

/// Pixel position to a simulation point
pub(crate) fn pixel_to_sim_point(world: &PhysicsWorld, pixel: Vector<Real>) -> Point<Real> {
    world.screen().position_to_sim(pixel).into()
}

/// Twice the signed area of a closed outline (positive when counter-clockwise)
pub(crate) fn signed_area2(points: &[Vector<Real>]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Whether every turn of the closed outline goes the same way
///
/// Collinear runs are allowed; a zero-area outline is not convex.
pub(crate) fn is_convex(points: &[Vector<Real>]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = (b - a).perp(&(c - b));
        if cross.abs() <= Real::EPSILON {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }

    // Same-sign turns still allow a star that winds twice
    sign != 0.0 && winds_once(points)
}

fn winds_once(points: &[Vector<Real>]) -> bool {
    let n = points.len();
    let mut turned = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let (e1, e2) = (b - a, c - b);
        if e1.norm_squared() == 0.0 || e2.norm_squared() == 0.0 {
            continue;
        }
        turned += e1.perp(&e2).atan2(e1.dot(&e2));
    }
    (turned.abs() - std::f32::consts::TAU).abs() < 1e-3
}
