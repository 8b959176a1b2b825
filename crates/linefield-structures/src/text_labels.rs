//! Free-floating text labels.

use glam::{DVec3, Vec3};
use linefield_core::structure::{split_axes, Structure};
use linefield_core::{LinefieldError, Result};
use linefield_render::color_to_hex;
use serde_json::{json, Value};

/// Text placed at points in space, drawn as a `text`-mode trace.
pub struct TextLabels {
    name: String,
    positions: Vec<DVec3>,
    texts: Vec<String>,
    color: Vec3,
    size: f64,
    opacity: f64,
}

impl TextLabels {
    /// Creates labels; there must be exactly one text per position.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        positions: Vec<DVec3>,
        texts: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.len() != positions.len() {
            return Err(LinefieldError::SizeMismatch {
                expected: positions.len(),
                actual: texts.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            positions,
            texts,
            color: Vec3::ONE,
            size: 12.0,
            opacity: 1.0,
        })
    }

    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    #[must_use]
    pub fn num_labels(&self) -> usize {
        self.texts.len()
    }

    /// Sets the font color and size.
    pub fn set_font(&mut self, color: Vec3, size: f64) -> &mut Self {
        self.color = color;
        self.size = size;
        self
    }
}

impl Structure for TextLabels {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "TextLabels"
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn to_trace(&self) -> Value {
        let (xs, ys, zs) = split_axes(&self.positions);
        json!({
            "type": "scatter3d",
            "mode": "text",
            "name": self.name,
            "x": xs,
            "y": ys,
            "z": zs,
            "text": self.texts,
            "textfont": {
                "color": color_to_hex(self.color),
                "size": self.size,
            },
            "textposition": "middle center",
            "opacity": self.opacity,
            "hoverinfo": "none",
        })
    }
}
