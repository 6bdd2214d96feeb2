//! Packed ARGB colors
//!
//! Colors are stored as `0xAARRGGBB` words, the layout used by fill and stroke
//! color properties. Interpolation happens per channel.

use std::fmt;

/// A packed `0xAARRGGBB` color
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const BLUE: Argb = Argb(0xFF00_00FF);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Opaque color from a `0xRRGGBB` value
    pub const fn from_rgb(hex: u32) -> Self {
        Self(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn channels(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Replace the alpha channel with `alpha` in 0.0..=1.0
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_channels(a, self.red(), self.green(), self.blue())
    }

    /// Component-wise interpolation of alpha, red, green and blue
    pub fn lerp(self, other: Argb, t: f32) -> Argb {
        let mix = |from: u8, to: u8| -> u8 {
            let from = from as f32;
            let to = to as f32;
            (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::from_channels(
            mix(self.alpha(), other.alpha()),
            mix(self.red(), other.red()),
            mix(self.green(), other.green()),
            mix(self.blue(), other.blue()),
        )
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(#{:08X})", self.0)
    }
}
