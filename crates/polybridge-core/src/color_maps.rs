//! Color maps used by lookup tables.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Evenly spaced color samples over the unit interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples, first at 0 and last at 1.
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the map at `t`, clamped to `[0, 1]`, interpolating linearly
    /// between neighbouring samples.
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self.colors.as_slice() {
            [] => Vec3::ZERO,
            [only] => *only,
            colors => {
                let segments = colors.len() - 1;
                let scaled = t * segments as f32;
                let lower = (scaled.floor() as usize).min(segments - 1);
                colors[lower].lerp(colors[lower + 1], scaled - lower as f32)
            }
        }
    }

    /// Returns the same map traversed from 1 to 0.
    pub fn reversed(&self) -> Self {
        let mut colors = self.colors.clone();
        colors.reverse();
        Self::new(format!("{}_r", self.name), colors)
    }
}

/// Named color maps, seeded with the built-in set.
#[derive(Debug, Clone, Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a registry holding the built-in maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        for map in builtin_maps() {
            registry.register(map);
        }
        registry
    }

    /// Registers a color map, replacing any map with the same name.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Returns all registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}

fn builtin_maps() -> Vec<ColorMap> {
    vec![
        ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ),
        ColorMap::new(
            "blues",
            vec![
                Vec3::new(0.969, 0.984, 1.000),
                Vec3::new(0.776, 0.859, 0.937),
                Vec3::new(0.419, 0.682, 0.839),
                Vec3::new(0.129, 0.443, 0.710),
                Vec3::new(0.031, 0.188, 0.420),
            ],
        ),
        ColorMap::new(
            "reds",
            vec![
                Vec3::new(1.000, 0.961, 0.941),
                Vec3::new(0.988, 0.733, 0.631),
                Vec3::new(0.984, 0.416, 0.290),
                Vec3::new(0.796, 0.094, 0.114),
                Vec3::new(0.404, 0.000, 0.051),
            ],
        ),
        ColorMap::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ),
        // Hue ramp from red to blue, the visualization library's default table.
        ColorMap::new(
            "rainbow",
            vec![
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
        ),
        ColorMap::new("gray", vec![Vec3::ZERO, Vec3::ONE]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints_and_midpoint() {
        let map = ColorMap::new("ramp", vec![Vec3::ZERO, Vec3::ONE]);
        assert_eq!(map.sample(0.0), Vec3::ZERO);
        assert_eq!(map.sample(1.0), Vec3::ONE);
        assert!((map.sample(0.5) - Vec3::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_sample_clamps() {
        let map = ColorMap::new("ramp", vec![Vec3::X, Vec3::Y]);
        assert_eq!(map.sample(-3.0), Vec3::X);
        assert_eq!(map.sample(7.0), Vec3::Y);
        assert_eq!(map.sample(f32::NAN), Vec3::X);
    }

    #[test]
    fn test_degenerate_maps() {
        assert_eq!(ColorMap::new("empty", vec![]).sample(0.3), Vec3::ZERO);
        assert_eq!(ColorMap::new("one", vec![Vec3::Z]).sample(0.3), Vec3::Z);
    }

    #[test]
    fn test_reversed() {
        let map = ColorMap::new("ramp", vec![Vec3::X, Vec3::Y]).reversed();
        assert_eq!(map.name, "ramp_r");
        assert_eq!(map.sample(0.0), Vec3::Y);
    }

    #[test]
    fn test_registry_builtins() {
        let registry = ColorMapRegistry::new();
        for name in ["viridis", "blues", "reds", "coolwarm", "rainbow", "gray"] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names().count(), 6);
    }
}
