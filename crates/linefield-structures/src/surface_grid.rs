//! Parametric surface sampled on a regular grid.

use glam::{DVec3, Vec3};
use linefield_core::structure::Structure;
use linefield_render::ColorMap;
use serde_json::{json, Value};

/// A surface given as a `rows x cols` grid of points.
///
/// Rows follow the first parameter and columns the second. The surface is
/// drawn in a single flat color.
pub struct SurfaceGrid {
    name: String,
    rows: Vec<Vec<DVec3>>,
    color: Vec3,
    opacity: f64,
}

impl SurfaceGrid {
    /// Creates a surface from an explicit grid of points.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<DVec3>>) -> Self {
        Self {
            name: name.into(),
            rows,
            color: Vec3::ONE,
            opacity: 1.0,
        }
    }

    /// Samples `f(u, v)` for every `u` in `us` (rows) and `v` in `vs` (columns).
    pub fn from_parametric(
        name: impl Into<String>,
        us: &[f64],
        vs: &[f64],
        f: impl Fn(f64, f64) -> DVec3,
    ) -> Self {
        let rows = us
            .iter()
            .map(|&u| vs.iter().map(|&v| f(u, v)).collect())
            .collect();
        Self::new(name, rows)
    }

    /// Returns `(rows, cols)`. Columns are counted on the first row.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<DVec3>] {
        &self.rows
    }

    pub fn set_color(&mut self, color: Vec3) -> &mut Self {
        self.color = color;
        self
    }

    fn component(&self, pick: impl Fn(DVec3) -> f64) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&p| pick(p)).collect())
            .collect()
    }
}

impl Structure for SurfaceGrid {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "SurfaceGrid"
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn to_trace(&self) -> Value {
        let ones: Vec<Vec<f64>> = self.rows.iter().map(|row| vec![1.0; row.len()]).collect();

        json!({
            "type": "surface",
            "name": self.name,
            "x": self.component(|p| p.x),
            "y": self.component(|p| p.y),
            "z": self.component(|p| p.z),
            "surfacecolor": ones,
            "colorscale": ColorMap::uniform(self.color).to_plotly(),
            "showscale": false,
            "opacity": self.opacity,
            "hoverinfo": "none",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cylinder() -> SurfaceGrid {
        let us = [-2.0, 0.0, 2.0];
        let vs = [0.0, std::f64::consts::FRAC_PI_2, std::f64::consts::PI, 1.5 * std::f64::consts::PI];
        SurfaceGrid::from_parametric("cyl", &us, &vs, |x, t| DVec3::new(x, t.cos(), t.sin()))
    }

    #[test]
    fn test_parametric_dimensions() {
        let cyl = cylinder();
        assert_eq!(cyl.dimensions(), (3, 4));
        assert_eq!(cyl.rows()[2][0], DVec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_grid() {
        let empty = SurfaceGrid::new("empty", Vec::new());
        assert_eq!(empty.dimensions(), (0, 0));
        assert_eq!(empty.to_trace()["x"], json!([]));
    }

    #[test]
    fn test_surface_trace() {
        let mut cyl = cylinder();
        cyl.set_opacity(0.3);
        let trace = cyl.to_trace();
        assert_eq!(trace["type"], "surface");
        assert_eq!(trace["x"].as_array().unwrap().len(), 3);
        assert_eq!(trace["x"][0], json!([-2.0, -2.0, -2.0, -2.0]));
        assert_eq!(trace["surfacecolor"][1], json!([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(
            trace["colorscale"],
            json!([[0.0, "#ffffff"], [1.0, "#ffffff"]])
        );
        assert_eq!(trace["showscale"], json!(false));
        assert_eq!(trace["opacity"], json!(0.3));
    }

    proptest! {
        #[test]
        fn prop_trace_arrays_match_grid(rows in 1usize..12, cols in 1usize..12) {
            let us: Vec<f64> = (0..rows).map(|i| i as f64).collect();
            let vs: Vec<f64> = (0..cols).map(|j| j as f64).collect();
            let grid = SurfaceGrid::from_parametric("g", &us, &vs, |u, v| DVec3::new(u, v, u * v));
            prop_assert_eq!(grid.dimensions(), (rows, cols));

            let trace = grid.to_trace();
            for key in ["x", "y", "z", "surfacecolor"] {
                let outer = trace[key].as_array().unwrap();
                prop_assert_eq!(outer.len(), rows);
                prop_assert!(outer.iter().all(|row| row.as_array().unwrap().len() == cols));
            }
        }
    }
}
