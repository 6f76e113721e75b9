//! Scalar to color lookup and the 8-bit color type baked onto meshes.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color_maps::{ColorMap, ColorMapRegistry};

/// An 8-bit RGBA color, as stored in a mesh's per-corner color layer.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes a float color and opacity.
    ///
    /// Color channels round to nearest; opacity truncates.
    pub fn from_color_opacity(color: Vec3, opacity: f32) -> Self {
        Self {
            r: channel_to_byte(color.x),
            g: channel_to_byte(color.y),
            b: channel_to_byte(color.z),
            a: opacity_to_byte(opacity),
        }
    }

    /// Returns the color channels as floats in `[0, 1]`.
    pub fn color(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Views a color slice as packed bytes, four per color.
    pub fn slice_as_bytes(colors: &[Self]) -> &[u8] {
        bytemuck::cast_slice(colors)
    }
}

/// Quantizes a color channel: `floor(255 x + 0.5)`, saturating.
pub fn channel_to_byte(x: f32) -> u8 {
    (255.0 * x + 0.5).clamp(0.0, 255.0) as u8
}

/// Quantizes an opacity: `floor(255 x)`, saturating.
pub fn opacity_to_byte(x: f32) -> u8 {
    (255.0 * x).clamp(0.0, 255.0) as u8
}

/// Maps a scalar value to a color and an opacity.
pub trait LookupTable {
    /// Returns the color for `scalar`, channels in `[0, 1]`.
    fn color(&self, scalar: f32) -> Vec3;

    /// Returns the opacity for `scalar` in `[0, 1]`.
    fn opacity(&self, scalar: f32) -> f32;

    /// Returns the quantized color and opacity for `scalar`.
    fn rgba(&self, scalar: f32) -> Rgba {
        Rgba::from_color_opacity(self.color(scalar), self.opacity(scalar))
    }
}

/// A lookup table that samples a [`ColorMap`] over a scalar range, with
/// opacity ramping linearly across the same range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLookupTable {
    color_map: ColorMap,
    range: (f32, f32),
    opacity_range: (f32, f32),
}

impl ColorLookupTable {
    /// Creates a fully opaque table mapping `[min, max]` onto `color_map`.
    pub fn new(color_map: ColorMap, min: f32, max: f32) -> Self {
        Self {
            color_map,
            range: (min, max),
            opacity_range: (1.0, 1.0),
        }
    }

    /// Creates a table from a built-in color map name.
    pub fn builtin(name: &str, min: f32, max: f32) -> Option<Self> {
        ColorMapRegistry::new()
            .get(name)
            .map(|map| Self::new(map.clone(), min, max))
    }

    /// Sets the opacity at the low and high ends of the range.
    pub fn with_opacity_range(mut self, low: f32, high: f32) -> Self {
        self.opacity_range = (low.clamp(0.0, 1.0), high.clamp(0.0, 1.0));
        self
    }

    /// Returns the scalar range.
    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Sets the scalar range.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.range = (min, max);
    }

    /// Returns the color map.
    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Position of `scalar` within the range, clamped to `[0, 1]`.
    /// A collapsed or inverted range maps everything to 0.
    fn normalize(&self, scalar: f32) -> f32 {
        let (min, max) = self.range;
        if max <= min {
            return 0.0;
        }
        ((scalar - min) / (max - min)).clamp(0.0, 1.0)
    }
}

impl Default for ColorLookupTable {
    fn default() -> Self {
        Self::builtin("rainbow", 0.0, 1.0)
            .unwrap_or_else(|| Self::new(ColorMap::new("gray", vec![Vec3::ZERO, Vec3::ONE]), 0.0, 1.0))
    }
}

impl LookupTable for ColorLookupTable {
    fn color(&self, scalar: f32) -> Vec3 {
        self.color_map.sample(self.normalize(scalar))
    }

    fn opacity(&self, scalar: f32) -> f32 {
        let (low, high) = self.opacity_range;
        low + (high - low) * self.normalize(scalar)
    }
}
