//! Line segments
//!
//! Static and kinematic lines are true zero-thickness segments. The engine
//! cannot simulate a zero-area dynamic body, so a dynamic line is backed by a
//! thin quad: both endpoints plus a twin of each one pixel lower on screen.
//! Either way the line is drawn between the two given endpoints.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::ShapeError;
use crate::shape::{local_to_screen, pixel_to_sim_point, signed_area2, Shape};
use sandbox2d_physics::{
    BodyHandle, ColliderBuilder, CollisionInfo, Motion, PhysicsWorld, Point, Real, Vector,
};

/// Pixel width lines are drawn with
pub const LINE_WIDTH: f32 = 1.0;

/// A line between two pixel points
///
/// The body sits at the simulation origin with the endpoints stored in body
/// space, so [`Shape::position`] reports pixel `(0, screen_height)` until the
/// line moves.
#[derive(Debug)]
pub struct Line {
    body: BodyHandle,
    /// Endpoints in body space (meters)
    endpoints: [Point<Real>; 2],
    colour: Colour,
}

impl Line {
    /// Create a line with any motion kind
    pub fn new(
        world: &mut PhysicsWorld,
        a: Vector<Real>,
        b: Vector<Real>,
        motion: Motion,
        colour: Colour,
    ) -> Result<Self, ShapeError> {
        if a == b {
            return Err(ShapeError::ZeroLengthLine);
        }

        let a_sim = pixel_to_sim_point(world, a);
        let b_sim = pixel_to_sim_point(world, b);

        let fixture = match motion {
            Motion::Static | Motion::Kinematic => ColliderBuilder::segment(a_sim, b_sim),
            Motion::Dynamic(_) => {
                let quad = [
                    a_sim,
                    pixel_to_sim_point(world, Vector::new(a.x, a.y + 1.0)),
                    b_sim,
                    pixel_to_sim_point(world, Vector::new(b.x, b.y + 1.0)),
                ];
                log::debug!("Dynamic line backed by quad {:?}", quad);

                // Vertical lines collapse the quad onto one axis
                let outline = [quad[0].coords, quad[1].coords, quad[3].coords, quad[2].coords];
                if signed_area2(&outline).abs() <= Real::EPSILON {
                    return Err(ShapeError::Degenerate);
                }
                ColliderBuilder::convex_hull(&quad).ok_or(ShapeError::Degenerate)?
            }
        };

        let body = world.create_body(Vector::zeros(), motion, fixture);

        log::trace!("Line {:?} from {:?} to {:?}", motion.kind(), a, b);
        Ok(Self {
            body,
            endpoints: [a_sim, b_sim],
            colour,
        })
    }

    /// A line that never moves
    pub fn new_static(
        world: &mut PhysicsWorld,
        a: Vector<Real>,
        b: Vector<Real>,
    ) -> Result<Self, ShapeError> {
        Self::new(world, a, b, Motion::Static, Colour::default())
    }

    /// A line moved by game code
    pub fn new_kinematic(
        world: &mut PhysicsWorld,
        a: Vector<Real>,
        b: Vector<Real>,
    ) -> Result<Self, ShapeError> {
        Self::new(world, a, b, Motion::Kinematic, Colour::default())
    }

    /// A fully simulated line (a one pixel thick quad underneath)
    pub fn new_dynamic(
        world: &mut PhysicsWorld,
        a: Vector<Real>,
        b: Vector<Real>,
        info: CollisionInfo,
    ) -> Result<Self, ShapeError> {
        Self::new(world, a, b, Motion::Dynamic(info), Colour::default())
    }

    /// Replace the colour while building
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Current endpoints in pixels
    pub fn endpoints(&self, world: &PhysicsWorld) -> [[f32; 2]; 2] {
        let points = local_to_screen(world, self.body, &self.endpoints);
        [points[0], points[1]]
    }

    /// Vertices of the simulated fixture in pixels
    ///
    /// Two points for a segment, four for the quad behind a dynamic line.
    pub fn collision_outline(&self, world: &PhysicsWorld) -> Vec<[f32; 2]> {
        let Some(fixture) = world.fixture(self.body) else {
            return Vec::new();
        };
        let shape = fixture.shape();
        let local: Vec<Point<Real>> = if let Some(polygon) = shape.as_convex_polygon() {
            polygon.points().to_vec()
        } else if let Some(segment) = shape.as_segment() {
            vec![segment.a, segment.b]
        } else {
            Vec::new()
        };
        local_to_screen(world, self.body, &local)
    }
}

impl Shape for Line {
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
        let [from, to] = self.endpoints(world);
        canvas.draw_line(from, to, LINE_WIDTH, self.colour);
    }
}
