//! Convex polygons

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::ShapeError;
use crate::shape::{is_convex, local_to_screen, pixel_to_sim_point, signed_area2, Shape};
use sandbox2d_physics::{
    BodyHandle, ColliderBuilder, CollisionInfo, Motion, PhysicsWorld, Point, Real, Vector,
};

/// A convex polygon from pixel vertices
///
/// Non-convex outlines are rejected rather than hulled. Like lines, the body
/// sits at the simulation origin with the vertices in body space.
#[derive(Debug)]
pub struct Polygon {
    body: BodyHandle,
    /// Vertices in body space (meters), in the order given
    vertices: Vec<Point<Real>>,
    colour: Colour,
}

impl Polygon {
    /// Create a polygon with any motion kind
    pub fn new(
        world: &mut PhysicsWorld,
        vertices: &[Vector<Real>],
        motion: Motion,
        colour: Colour,
    ) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }

        let local: Vec<Point<Real>> = vertices
            .iter()
            .map(|v| pixel_to_sim_point(world, *v))
            .collect();
        let outline: Vec<Vector<Real>> = local.iter().map(|p| p.coords).collect();

        if signed_area2(&outline).abs() <= Real::EPSILON {
            return Err(ShapeError::Degenerate);
        }
        if !is_convex(&outline) {
            return Err(ShapeError::NonConvex);
        }

        let fixture = ColliderBuilder::convex_hull(&local).ok_or(ShapeError::Degenerate)?;
        let body = world.create_body(Vector::zeros(), motion, fixture);

        log::trace!("Polygon {:?} with {} vertices", motion.kind(), vertices.len());
        Ok(Self {
            body,
            vertices: local,
            colour,
        })
    }

    /// A polygon that never moves
    pub fn new_static(world: &mut PhysicsWorld, vertices: &[Vector<Real>]) -> Result<Self, ShapeError> {
        Self::new(world, vertices, Motion::Static, Colour::default())
    }

    /// A polygon moved by game code
    pub fn new_kinematic(
        world: &mut PhysicsWorld,
        vertices: &[Vector<Real>],
    ) -> Result<Self, ShapeError> {
        Self::new(world, vertices, Motion::Kinematic, Colour::default())
    }

    /// A fully simulated polygon
    pub fn new_dynamic(
        world: &mut PhysicsWorld,
        vertices: &[Vector<Real>],
        info: CollisionInfo,
    ) -> Result<Self, ShapeError> {
        Self::new(world, vertices, Motion::Dynamic(info), Colour::default())
    }

    /// Replace the colour while building
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Current vertices in pixels
    pub fn vertices(&self, world: &PhysicsWorld) -> Vec<[f32; 2]> {
        local_to_screen(world, self.body, &self.vertices)
    }
}

impl Shape for Polygon {
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
        canvas.draw_polygon(&self.vertices(world), self.colour);
    }
}
