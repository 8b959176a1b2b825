//! Point cloud structure.

mod quantities;

use glam::DVec3;
use linefield_core::quantity::Quantity;
use linefield_core::structure::{split_axes, Structure};
use linefield_core::{LinefieldError, Result};
use linefield_render::ColorMap;
use serde_json::{json, Value};

pub use quantities::*;

/// A point cloud drawn as Plotly markers.
///
/// Opacity is applied per marker (`marker.opacity`), not per trace. Without
/// quantities the markers use Plotly's default size and color.
pub struct PointCloud {
    name: String,
    points: Vec<DVec3>,
    opacity: f64,
    color_quantity: Option<PointCloudScalarQuantity>,
    size_quantity: Option<PointCloudSizeQuantity>,
}

impl PointCloud {
    /// Creates a new point cloud.
    pub fn new(name: impl Into<String>, points: Vec<DVec3>) -> Self {
        Self {
            name: name.into(),
            points,
            opacity: 1.0,
            color_quantity: None,
            size_quantity: None,
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Colors the points by a scalar through a color map.
    pub fn add_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
        color_map: ColorMap,
    ) -> Result<&mut Self> {
        let quantity = PointCloudScalarQuantity::new(name, self.name.clone(), values, color_map);
        self.check_size(&quantity)?;
        self.color_quantity = Some(quantity);
        Ok(self)
    }

    /// Sizes each point individually.
    pub fn add_size_quantity(
        &mut self,
        name: impl Into<String>,
        sizes: Vec<f64>,
    ) -> Result<&mut Self> {
        let quantity = PointCloudSizeQuantity::new(name, self.name.clone(), sizes);
        self.check_size(&quantity)?;
        self.size_quantity = Some(quantity);
        Ok(self)
    }

    fn check_size(&self, quantity: &dyn Quantity) -> Result<()> {
        if quantity.data_size() == self.points.len() {
            log::debug!(
                "'{}': attached quantity '{}' ({} values)",
                quantity.structure_name(),
                quantity.name(),
                quantity.data_size()
            );
            Ok(())
        } else {
            Err(LinefieldError::SizeMismatch {
                expected: self.points.len(),
                actual: quantity.data_size(),
            })
        }
    }

    /// Returns the color quantity, if any.
    #[must_use]
    pub fn color_quantity(&self) -> Option<&PointCloudScalarQuantity> {
        self.color_quantity.as_ref()
    }

    /// Returns the size quantity, if any.
    #[must_use]
    pub fn size_quantity(&self) -> Option<&PointCloudSizeQuantity> {
        self.size_quantity.as_ref()
    }
}

impl Structure for PointCloud {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "PointCloud"
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn to_trace(&self) -> Value {
        let (xs, ys, zs) = split_axes(&self.points);

        let mut marker = json!({
            "opacity": self.opacity,
            "symbol": "circle",
            "line": { "width": 0 },
        });
        if let Some(q) = &self.size_quantity {
            marker["size"] = json!(q.sizes());
        }
        if let Some(q) = &self.color_quantity {
            marker["color"] = json!(q.values());
            marker["colorscale"] = q.color_map().to_plotly();
        }

        json!({
            "type": "scatter3d",
            "mode": "markers",
            "name": self.name,
            "x": xs,
            "y": ys,
            "z": zs,
            "marker": marker,
            "hoverinfo": "none",
        })
    }
}
