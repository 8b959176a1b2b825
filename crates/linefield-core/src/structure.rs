//! Structure trait and related types.
//!
//! A [`Structure`] is one drawable primitive in the figure, such as a point
//! cloud, a line, a surface, a cone marker or a set of text labels. Each
//! structure serializes to exactly one Plotly trace.

use std::any::Any;

use glam::DVec3;
use serde_json::Value;

/// A drawable primitive that serializes to a single Plotly trace.
///
/// Structures have:
/// - A unique name within the scene
/// - An opacity that the scroll listener may later restyle
/// - A fixed geometry written into the trace
pub trait Structure: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the unique name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`PointCloud`", "`SurfaceGrid`").
    fn type_name(&self) -> &'static str;

    /// Returns the initial opacity written into the trace.
    fn opacity(&self) -> f64;

    /// Sets the initial opacity.
    fn set_opacity(&mut self, opacity: f64);

    /// Serializes this structure into a Plotly trace object.
    fn to_trace(&self) -> Value;
}

/// Splits points into the per-axis coordinate arrays Plotly expects.
pub fn split_axes(points: &[DVec3]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let xs = points.iter().map(|p| p.x).collect();
    let ys = points.iter().map(|p| p.y).collect();
    let zs = points.iter().map(|p| p.z).collect();
    (xs, ys, zs)
}
