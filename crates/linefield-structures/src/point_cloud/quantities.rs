//! Point cloud quantity implementations.

use linefield_core::quantity::Quantity;
use linefield_render::ColorMap;

/// A scalar quantity on a point cloud, colored through a color map.
pub struct PointCloudScalarQuantity {
    name: String,
    structure_name: String,
    values: Vec<f64>,
    color_map: ColorMap,
}

impl PointCloudScalarQuantity {
    /// Creates a new scalar quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        values: Vec<f64>,
        color_map: ColorMap,
    ) -> Self {
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            values,
            color_map,
        }
    }

    /// Returns the scalar values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the color map.
    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }
}

impl Quantity for PointCloudScalarQuantity {
    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn data_size(&self) -> usize {
        self.values.len()
    }
}

/// Per-point marker sizes.
pub struct PointCloudSizeQuantity {
    name: String,
    structure_name: String,
    sizes: Vec<f64>,
}

impl PointCloudSizeQuantity {
    /// Creates a new size quantity.
    pub fn new(name: impl Into<String>, structure_name: impl Into<String>, sizes: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            sizes,
        }
    }

    /// Returns the sizes.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }
}

impl Quantity for PointCloudSizeQuantity {
    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn data_size(&self) -> usize {
        self.sizes.len()
    }
}
