//! Axis-aligned rectangles, specified by their top-left corner

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::ShapeError;
use crate::shape::{local_to_screen, Shape};
use sandbox2d_physics::{
    BodyHandle, ColliderBuilder, CollisionInfo, Motion, PhysicsWorld, Point, Real, Vector,
};

/// A rectangle placed by its top-left pixel corner and pixel size
///
/// The body sits at the rectangle's center, so [`Shape::position`] reports
/// the center, not the corner it was built from.
#[derive(Debug)]
pub struct Rectangle {
    body: BodyHandle,
    /// Half width and half height in meters
    half_extents: Vector<Real>,
    colour: Colour,
}

impl Rectangle {
    /// Create a rectangle with any motion kind
    pub fn new(
        world: &mut PhysicsWorld,
        top_left: Vector<Real>,
        size: Vector<Real>,
        motion: Motion,
        colour: Colour,
    ) -> Result<Self, ShapeError> {
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ShapeError::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }

        let screen = *world.screen();
        let center = top_left + size / 2.0;
        let half_extents = screen.to_sim_point(size / 2.0);
        let body = world.create_body(
            screen.position_to_sim(center),
            motion,
            ColliderBuilder::cuboid(half_extents.x, half_extents.y),
        );

        log::trace!("Rectangle {:?} at {:?} size {:?}", motion.kind(), top_left, size);
        Ok(Self {
            body,
            half_extents,
            colour,
        })
    }

    /// A rectangle that never moves
    pub fn new_static(
        world: &mut PhysicsWorld,
        top_left: Vector<Real>,
        size: Vector<Real>,
    ) -> Result<Self, ShapeError> {
        Self::new(world, top_left, size, Motion::Static, Colour::default())
    }

    /// A rectangle moved by game code
    pub fn new_kinematic(
        world: &mut PhysicsWorld,
        top_left: Vector<Real>,
        size: Vector<Real>,
    ) -> Result<Self, ShapeError> {
        Self::new(world, top_left, size, Motion::Kinematic, Colour::default())
    }

    /// A fully simulated rectangle
    pub fn new_dynamic(
        world: &mut PhysicsWorld,
        top_left: Vector<Real>,
        size: Vector<Real>,
        info: CollisionInfo,
    ) -> Result<Self, ShapeError> {
        Self::new(world, top_left, size, Motion::Dynamic(info), Colour::default())
    }

    /// Replace the colour while building
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Width and height in pixels
    pub fn size(&self, world: &PhysicsWorld) -> Vector<Real> {
        world.screen().to_screen_point(self.half_extents * 2.0)
    }

    /// Current corners in pixels
    pub fn corners(&self, world: &PhysicsWorld) -> Vec<[f32; 2]> {
        let (hx, hy) = (self.half_extents.x, self.half_extents.y);
        local_to_screen(
            world,
            self.body,
            &[Point::new(-hx, -hy), Point::new(hx, -hy), Point::new(hx, hy), Point::new(-hx, hy)],
        )
    }
}

impl Shape for Rectangle {
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
        canvas.draw_polygon(&self.corners(world), self.colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_size() {
        let mut world = PhysicsWorld::new();
        let err = Rectangle::new_static(&mut world, Vector::new(0.0, 0.0), Vector::new(0.0, 5.0)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidSize {
                width: 0.0,
                height: 5.0
            }
        );
    }

    #[test]
    fn test_corners_span_the_requested_box() {
        let mut world = PhysicsWorld::new();
        let rect = Rectangle::new_static(&mut world, Vector::new(5.0, 5.0), Vector::new(20.0, 10.0)).unwrap();

        let corners = rect.corners(&world);
        let min_x = corners.iter().map(|c| c[0]).fold(f32::MAX, f32::min);
        let max_x = corners.iter().map(|c| c[0]).fold(f32::MIN, f32::max);
        let min_y = corners.iter().map(|c| c[1]).fold(f32::MAX, f32::min);
        let max_y = corners.iter().map(|c| c[1]).fold(f32::MIN, f32::max);

        assert!((min_x - 5.0).abs() < 1e-3 && (max_x - 25.0).abs() < 1e-3);
        assert!((min_y - 5.0).abs() < 1e-3 && (max_y - 15.0).abs() < 1e-3);
        assert!((rect.size(&world) - Vector::new(20.0, 10.0)).norm() < 1e-3);
    }
}
