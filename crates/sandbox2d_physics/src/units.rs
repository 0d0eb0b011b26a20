//! Conversions between screen space and simulation space
//!
//! Screen space is measured in pixels with the origin at the top-left corner and
//! Y growing downward. Simulation space is measured in meters with Y growing
//! upward. Every value crossing the boundary goes through [`ScreenSpace`]:
//! positions are flipped then scaled on the way in, and scaled then flipped on
//! the way out, so a get/set pair round-trips.

use rapier2d::math::{Real, Vector};

/// Fixed scale and screen height shared by every coordinate conversion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSpace {
    /// How many pixels make up one simulation meter
    pub pixels_per_meter: Real,
    /// Height of the screen in pixels (the flip axis)
    pub screen_height: Real,
}

impl Default for ScreenSpace {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            screen_height: 480.0,
        }
    }
}

impl ScreenSpace {
    /// Create a screen space with the given scale and height
    pub fn new(pixels_per_meter: Real, screen_height: Real) -> Self {
        Self {
            pixels_per_meter,
            screen_height,
        }
    }

    /// Pixels to meters
    #[inline]
    pub fn to_sim_scalar(&self, pixels: Real) -> Real {
        pixels / self.pixels_per_meter
    }

    /// Meters to pixels
    #[inline]
    pub fn to_screen_scalar(&self, meters: Real) -> Real {
        meters * self.pixels_per_meter
    }

    /// Scale each component from pixels to meters (no flip)
    #[inline]
    pub fn to_sim_point(&self, pixels: Vector<Real>) -> Vector<Real> {
        Vector::new(self.to_sim_scalar(pixels.x), self.to_sim_scalar(pixels.y))
    }

    /// Scale each component from meters to pixels (no flip)
    #[inline]
    pub fn to_screen_point(&self, meters: Vector<Real>) -> Vector<Real> {
        Vector::new(self.to_screen_scalar(meters.x), self.to_screen_scalar(meters.y))
    }

    /// Mirror a position around the screen height
    ///
    /// The flip is its own inverse, so the same call is used in both directions.
    #[inline]
    pub fn flip_y_position(&self, position: Vector<Real>) -> Vector<Real> {
        Vector::new(position.x, self.screen_height - position.y)
    }

    /// Pixel position (Y-down) to simulation position (meters, Y-up)
    pub fn position_to_sim(&self, pixels: Vector<Real>) -> Vector<Real> {
        self.to_sim_point(self.flip_y_position(pixels))
    }

    /// Simulation position (meters, Y-up) to pixel position (Y-down)
    pub fn position_to_screen(&self, meters: Vector<Real>) -> Vector<Real> {
        self.flip_y_position(self.to_screen_point(meters))
    }

    /// Pixel velocity (px/s, Y-down) to simulation velocity (m/s, Y-up)
    pub fn velocity_to_sim(&self, pixels: Vector<Real>) -> Vector<Real> {
        self.to_sim_point(flip_y_velocity(pixels))
    }

    /// Simulation velocity (m/s, Y-up) to pixel velocity (px/s, Y-down)
    pub fn velocity_to_screen(&self, meters: Vector<Real>) -> Vector<Real> {
        self.to_screen_point(flip_y_velocity(meters))
    }
}

/// Negate the Y component of a direction
///
/// Velocities have no origin, so only the sign changes between the two spaces.
#[inline]
pub fn flip_y_velocity(velocity: Vector<Real>) -> Vector<Real> {
    Vector::new(velocity.x, -velocity.y)
}
