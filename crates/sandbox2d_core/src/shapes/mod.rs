//! The four concrete shape kinds
//!
//! Each kind takes its motion as a [`sandbox2d_physics::Motion`] and has
//! `new_static`, `new_kinematic` and `new_dynamic` shorthands.

mod circle;
mod line;
mod polygon;
mod rectangle;

pub use circle::Circle;
pub use line::{Line, LINE_WIDTH};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
