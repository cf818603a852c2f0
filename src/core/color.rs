//! Topic colors and intensity blending.
//!
//! Each topic gets a stable base color from a categorical palette. The
//! fingerprint renderer washes the base color toward white by intensity:
//! intensity 0 renders pure white, intensity 1 the full base color.

use serde::{Deserialize, Serialize};

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Default categorical palette, one entry per topic index (cycled when the
/// topic count exceeds the palette size).
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Stable base color for a topic index.
    #[inline]
    pub fn for_topic(index: usize) -> Rgb {
        PALETTE[index % PALETTE.len()]
    }

    /// Blend from white toward this color by `intensity` in [0, 1].
    ///
    /// Each channel is interpolated independently:
    /// `blended = white + (base - white) * intensity`, clamped to [0, 255].
    /// Intensity outside [0, 1] is clamped first.
    pub fn blend_from_white(&self, intensity: f32) -> Rgb {
        let t = intensity.clamp(0.0, 1.0);
        let channel = |base: u8| -> u8 {
            let v = 255.0 + (base as f32 - 255.0) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// CSS hex representation, e.g. `#1f77b4`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
