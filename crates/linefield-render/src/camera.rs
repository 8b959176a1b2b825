//! Camera and view management.

use glam::DVec3;
use linefield_core::CameraOptions;
use serde_json::{json, Value};

/// A fixed perspective scene camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position.
    pub eye: DVec3,
    /// Look-at point.
    pub center: DVec3,
    /// Up direction.
    pub up: DVec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Builds a camera from the figure options.
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            eye: options.eye,
            center: options.center,
            up: options.up,
        }
    }

    /// Serializes the camera into a Plotly `scene.camera` object.
    pub fn to_plotly(&self) -> Value {
        json!({
            "up": vec3_json(self.up),
            "center": vec3_json(self.center),
            "eye": vec3_json(self.eye),
            "projection": { "type": "perspective" },
        })
    }
}

fn vec3_json(v: DVec3) -> Value {
    json!({ "x": v.x, "y": v.y, "z": v.z })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_from_options() {
        let camera = Camera::default();
        assert_eq!(camera.eye, DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(camera.center, DVec3::ZERO);
        assert_eq!(camera.up, DVec3::Y);
    }

    #[test]
    fn test_to_plotly() {
        let value = Camera::default().to_plotly();
        assert_eq!(value["eye"], json!({ "x": 0.0, "y": 0.0, "z": 2.0 }));
        assert_eq!(value["up"], json!({ "x": 0.0, "y": 1.0, "z": 0.0 }));
        assert_eq!(value["center"], json!({ "x": 0.0, "y": 0.0, "z": 0.0 }));
        assert_eq!(value["projection"]["type"], "perspective");
    }
}
