//! Draw commands to triangles
//!
//! Everything is emitted as an unindexed triangle list in pixel space.

use std::f32::consts::TAU;

use sandbox2d_core::{DrawCommand, DrawList};

use crate::pipeline::Vertex2D;

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Tessellate every command in the list, in order
pub fn tessellate(list: &DrawList) -> Vec<Vertex2D> {
    let mut vertices = Vec::with_capacity(list.len() * CIRCLE_SEGMENTS as usize * 3);
    for command in list.commands() {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                colour,
            } => circle(&mut vertices, *center, *radius, colour.to_f32(), CIRCLE_SEGMENTS),
            DrawCommand::Line {
                from,
                to,
                width,
                colour,
            } => line(&mut vertices, *from, *to, *width, colour.to_f32()),
            DrawCommand::Polygon { points, colour } => {
                convex_fan(&mut vertices, points, colour.to_f32())
            }
        }
    }
    vertices
}

/// Triangle fan around the center
fn circle(out: &mut Vec<Vertex2D>, center: [f32; 2], radius: f32, color: [f32; 4], segments: u32) {
    let point = |i: u32| {
        let angle = i as f32 / segments as f32 * TAU;
        [
            center[0] + radius * angle.cos(),
            center[1] + radius * angle.sin(),
        ]
    };

    for i in 0..segments {
        out.push(Vertex2D::new(center, color));
        out.push(Vertex2D::new(point(i), color));
        out.push(Vertex2D::new(point(i + 1), color));
    }
}

/// Quad of the given width centred on the segment
fn line(out: &mut Vec<Vertex2D>, from: [f32; 2], to: [f32; 2], width: f32, color: [f32; 4]) {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return;
    }

    let half = width / 2.0;
    let perp = [-dy / len * half, dx / len * half];

    let a = [from[0] + perp[0], from[1] + perp[1]];
    let b = [from[0] - perp[0], from[1] - perp[1]];
    let c = [to[0] + perp[0], to[1] + perp[1]];
    let d = [to[0] - perp[0], to[1] - perp[1]];

    out.extend([a, b, c, c, b, d].map(|p| Vertex2D::new(p, color)));
}

/// Fan from the first point; correct for convex outlines
fn convex_fan(out: &mut Vec<Vertex2D>, points: &[[f32; 2]], color: [f32; 4]) {
    if points.len() < 3 {
        return;
    }
    for pair in points[1..].windows(2) {
        out.push(Vertex2D::new(points[0], color));
        out.push(Vertex2D::new(pair[0], color));
        out.push(Vertex2D::new(pair[1], color));
    }
}
