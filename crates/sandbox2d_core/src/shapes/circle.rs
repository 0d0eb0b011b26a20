//! Circles

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::ShapeError;
use crate::shape::Shape;
use sandbox2d_physics::{
    BodyHandle, ColliderBuilder, CollisionInfo, Motion, PhysicsWorld, Real, Vector,
};

/// A circle given by its center and radius in pixels
#[derive(Debug)]
pub struct Circle {
    body: BodyHandle,
    /// Radius in meters
    radius: Real,
    colour: Colour,
}

impl Circle {
    /// Create a circle with any motion kind
    pub fn new(
        world: &mut PhysicsWorld,
        center: Vector<Real>,
        radius: Real,
        motion: Motion,
        colour: Colour,
    ) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius(radius));
        }

        let screen = *world.screen();
        let radius = screen.to_sim_scalar(radius);
        let body = world.create_body(
            screen.position_to_sim(center),
            motion,
            ColliderBuilder::ball(radius),
        );

        log::trace!("Circle {:?} at {:?} r={}m", motion.kind(), center, radius);
        Ok(Self {
            body,
            radius,
            colour,
        })
    }

    /// A circle that never moves
    pub fn new_static(
        world: &mut PhysicsWorld,
        center: Vector<Real>,
        radius: Real,
    ) -> Result<Self, ShapeError> {
        Self::new(world, center, radius, Motion::Static, Colour::default())
    }

    /// A circle moved by game code; pushes others but is never pushed
    pub fn new_kinematic(
        world: &mut PhysicsWorld,
        center: Vector<Real>,
        radius: Real,
    ) -> Result<Self, ShapeError> {
        Self::new(world, center, radius, Motion::Kinematic, Colour::default())
    }

    /// A fully simulated circle
    pub fn new_dynamic(
        world: &mut PhysicsWorld,
        center: Vector<Real>,
        radius: Real,
        info: CollisionInfo,
    ) -> Result<Self, ShapeError> {
        Self::new(world, center, radius, Motion::Dynamic(info), Colour::default())
    }

    /// Replace the colour while building
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Radius in pixels
    pub fn radius(&self, world: &PhysicsWorld) -> Real {
        world.screen().to_screen_scalar(self.radius)
    }
}

impl Shape for Circle {
    fn body(&self) -> BodyHandle {
        self.body
    }

    fn colour(&self) -> Colour {
        self.colour
    }

    fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    fn draw(&self, world: &PhysicsWorld, canvas: &mut dyn Canvas) {
        let center = self.position(world);
        canvas.draw_circle([center.x, center.y], self.radius(world), self.colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, DrawList};

    #[test]
    fn test_rejects_bad_radius() {
        let mut world = PhysicsWorld::new();
        for radius in [0.0, -1.0, Real::NAN] {
            let err = Circle::new_static(&mut world, Vector::new(10.0, 10.0), radius).unwrap_err();
            assert!(matches!(err, ShapeError::InvalidRadius(_)));
        }
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_draws_at_center_with_pixel_radius() {
        let mut world = PhysicsWorld::new();
        let circle = Circle::new_static(&mut world, Vector::new(100.0, 50.0), 10.0)
            .unwrap()
            .with_colour(Colour::rgb(1, 2, 3));

        let mut list = DrawList::new();
        circle.draw(&world, &mut list);

        match &list.commands()[0] {
            DrawCommand::Circle {
                center,
                radius,
                colour,
            } => {
                assert!((center[0] - 100.0).abs() < 1e-3);
                assert!((center[1] - 50.0).abs() < 1e-3);
                assert!((radius - 10.0).abs() < 1e-4);
                assert_eq!(*colour, Colour::rgb(1, 2, 3));
            }
            other => panic!("Expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_default_colour_is_white() {
        let mut world = PhysicsWorld::new();
        let circle = Circle::new_kinematic(&mut world, Vector::new(0.0, 0.0), 1.0).unwrap();
        assert_eq!(circle.colour(), Colour::WHITE);
    }
}
