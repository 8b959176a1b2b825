//! Color map system.

use std::collections::HashMap;

use glam::Vec3;
use serde_json::{json, Value};

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
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

    /// Creates a two-stop map that is the same color everywhere.
    pub fn uniform(color: Vec3) -> Self {
        Self::new("uniform", vec![color, color])
    }

    /// Converts this map into a Plotly `colorscale` array.
    pub fn to_plotly(&self) -> Value {
        let n = self.colors.len().saturating_sub(1).max(1);
        let stops: Vec<Value> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, &c)| json!([i as f64 / n as f64, color_to_hex(c)]))
            .collect();
        Value::Array(stops)
    }
}

/// Formats an RGB color in [0, 1] as `#rrggbb`.
pub fn color_to_hex(color: Vec3) -> String {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("#{:02x}{:02x}{:02x}", c.x as u8, c.y as u8, c.z as u8)
}

fn rgb(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(f32::from(r), f32::from(g), f32::from(b)) / 255.0
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // cmocean "matter"
        self.register(ColorMap::new(
            "matter",
            vec![
                rgb(253, 237, 176),
                rgb(250, 205, 145),
                rgb(246, 173, 119),
                rgb(240, 142, 98),
                rgb(231, 109, 84),
                rgb(216, 80, 83),
                rgb(195, 56, 90),
                rgb(168, 40, 96),
                rgb(138, 29, 99),
                rgb(107, 24, 93),
                rgb(76, 21, 80),
                rgb(47, 15, 61),
            ],
        ));

        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        self.register(ColorMap::new(
            "reds",
            vec![
                Vec3::new(1.000, 0.961, 0.941),
                Vec3::new(0.988, 0.733, 0.631),
                Vec3::new(0.984, 0.416, 0.290),
                Vec3::new(0.796, 0.094, 0.114),
                Vec3::new(0.404, 0.000, 0.051),
            ],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Gets a color map by name, falling back to "matter".
    pub fn get_or_default(&self, name: &str) -> ColorMap {
        if let Some(map) = self.get(name) {
            return map.clone();
        }
        log::warn!("unknown color map '{name}', using 'matter'");
        self.get("matter")
            .cloned()
            .unwrap_or_else(|| ColorMap::uniform(Vec3::ONE))
    }

    /// Returns all registered color map names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.color_maps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
