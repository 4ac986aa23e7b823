use serde::{Deserialize, Serialize};

/// RGBA color carried on bodies for the presentation layer.
///
/// The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Default ball outline.
    pub const BALL_OUTLINE: Self = Self::rgb(255, 50, 50);
    /// Default translucent ball fill.
    pub const BALL_FILL: Self = Self::rgba(255, 100, 100, 180);
    /// Default line color.
    pub const LINE: Self = Self::rgb(100, 100, 100);
}
