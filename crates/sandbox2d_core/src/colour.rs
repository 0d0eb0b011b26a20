//! RGBA colour values

use serde::{Deserialize, Serialize};

/// An RGBA colour, each channel 0-255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour(pub [u8; 4]);

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Colour {
    /// Opaque white
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Opaque black
    pub const BLACK: Self = Self([0, 0, 0, 255]);

    /// Create a colour from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Create an opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Channels as 0.0-1.0 floats for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(rgba: [u8; 4]) -> Self {
        Self(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Colour::default(), Colour::new(255, 255, 255, 255));
    }

    #[test]
    fn test_to_f32() {
        assert_eq!(Colour::rgb(255, 0, 0).to_f32(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Colour::new(0, 0, 0, 0).to_f32(), [0.0; 4]);
    }
}
