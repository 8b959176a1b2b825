//! Arrowheads drawn as Plotly cones.

use glam::{DVec3, Vec3};
use linefield_core::structure::Structure;
use linefield_render::ColorMap;
use serde_json::{json, Value};

/// A single cone anchored by its tail at `position`, pointing along `direction`.
pub struct DirectionMarker {
    name: String,
    position: DVec3,
    direction: DVec3,
    size: f64,
    color: Vec3,
    opacity: f64,
}

impl DirectionMarker {
    pub fn new(name: impl Into<String>, position: DVec3, direction: DVec3) -> Self {
        Self {
            name: name.into(),
            position,
            direction,
            size: 0.1,
            color: Vec3::ONE,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Sets the absolute cone size (`sizeref`).
    pub fn set_size(&mut self, size: f64) -> &mut Self {
        self.size = size;
        self
    }

    pub fn set_color(&mut self, color: Vec3) -> &mut Self {
        self.color = color;
        self
    }
}

impl Structure for DirectionMarker {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "DirectionMarker"
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn to_trace(&self) -> Value {
        let p = self.position;
        let d = self.direction;
        json!({
            "type": "cone",
            "name": self.name,
            "x": [p.x],
            "y": [p.y],
            "z": [p.z],
            "u": [d.x],
            "v": [d.y],
            "w": [d.z],
            "sizemode": "absolute",
            "sizeref": self.size,
            "anchor": "tail",
            "showscale": false,
            "colorscale": ColorMap::uniform(self.color).to_plotly(),
            "opacity": self.opacity,
            "hoverinfo": "none",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_trace() {
        let mut cone = DirectionMarker::new("tip", DVec3::new(0.0, 2.0, 0.0), DVec3::Y);
        cone.set_size(0.15).set_color(Vec3::new(1.0, 0.0, 0.0));
        cone.set_opacity(0.0);

        let trace = cone.to_trace();
        assert_eq!(trace["type"], "cone");
        assert_eq!(trace["y"], json!([2.0]));
        assert_eq!(trace["v"], json!([1.0]));
        assert_eq!(trace["sizemode"], "absolute");
        assert_eq!(trace["sizeref"], json!(0.15));
        assert_eq!(trace["anchor"], "tail");
        assert_eq!(trace["colorscale"][0][1], "#ff0000");
        assert_eq!(trace["opacity"], json!(0.0));
        assert_eq!(trace["hoverinfo"], "none");
    }

    #[test]
    fn test_default_marker() {
        let cone = DirectionMarker::new("tip", DVec3::X, DVec3::Z);
        assert_eq!(cone.position(), DVec3::X);
        assert_eq!(cone.direction(), DVec3::Z);
        assert_eq!(cone.to_trace()["sizeref"], json!(0.1));
    }
}
