//! The drawing surface shapes render onto
//!
//! Shapes only know [`Canvas`]. The renderer consumes a recorded
//! [`DrawList`] so the core never touches the GPU.

use crate::Colour;

/// Pixel-space drawing primitives (origin top-left, Y down)
pub trait Canvas {
    /// Filled circle
    fn draw_circle(&mut self, center: [f32; 2], radius: f32, colour: Colour);

    /// Line segment of the given pixel width
    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, colour: Colour);

    /// Filled convex polygon
    fn draw_polygon(&mut self, points: &[[f32; 2]], colour: Colour);
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: [f32; 2],
        radius: f32,
        colour: Colour,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        colour: Colour,
    },
    Polygon {
        points: Vec<[f32; 2]>,
        colour: Colour,
    },
}

/// A canvas that records draw calls for a later render pass
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every recorded command, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn draw_circle(&mut self, center: [f32; 2], radius: f32, colour: Colour) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            colour,
        });
    }

    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, colour: Colour) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            colour,
        });
    }

    fn draw_polygon(&mut self, points: &[[f32; 2]], colour: Colour) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            colour,
        });
    }
}
