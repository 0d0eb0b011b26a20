//! Shape construction errors

use std::fmt;

/// Error type for shape construction
///
/// Every variant is a caller mistake caught before a physics body exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Circle radius is zero, negative or not finite
    InvalidRadius(f32),
    /// Rectangle width or height is zero, negative or not finite
    InvalidSize { width: f32, height: f32 },
    /// Polygon has fewer than three vertices
    TooFewVertices(usize),
    /// Polygon vertices do not form a convex outline
    NonConvex,
    /// Points enclose no area
    Degenerate,
    /// Line endpoints coincide
    ZeroLengthLine,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidRadius(r) => write!(f, "Invalid circle radius: {}", r),
            ShapeError::InvalidSize { width, height } => {
                write!(f, "Invalid rectangle size: {}x{}", width, height)
            }
            ShapeError::TooFewVertices(n) => {
                write!(f, "Polygon needs at least 3 vertices, got {}", n)
            }
            ShapeError::NonConvex => write!(f, "Polygon is not convex"),
            ShapeError::Degenerate => write!(f, "Shape has zero area"),
            ShapeError::ZeroLengthLine => write!(f, "Line endpoints coincide"),
        }
    }
}

impl std::error::Error for ShapeError {}
