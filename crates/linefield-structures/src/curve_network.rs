//! Curve network structure.

use glam::{DVec3, Vec3};
use linefield_core::structure::{split_axes, Structure};
use linefield_render::color_to_hex;
use serde_json::{json, Value};

use crate::style::{HoverInfo, LineDash, TextPosition};

/// A polyline through a sequence of nodes, drawn as a Plotly line trace.
///
/// Labels, when set, switch the trace to `lines+text`.
pub struct CurveNetwork {
    name: String,
    nodes: Vec<DVec3>,

    color: Vec3,
    width: f64,
    dash: LineDash,
    opacity: f64,
    hover: HoverInfo,

    labels: Vec<String>,
    label_color: Vec3,
    label_size: f64,
    label_position: TextPosition,
}

impl CurveNetwork {
    /// Creates a polyline through `nodes`.
    pub fn new_line(name: impl Into<String>, nodes: Vec<DVec3>) -> Self {
        Self {
            name: name.into(),
            nodes,
            color: Vec3::ONE,
            width: 2.0,
            dash: LineDash::Solid,
            opacity: 1.0,
            hover: HoverInfo::None,
            labels: Vec::new(),
            label_color: Vec3::ONE,
            label_size: 12.0,
            label_position: TextPosition::MiddleCenter,
        }
    }

    /// Creates a single segment from `start` to `end`.
    pub fn new_segment(name: impl Into<String>, start: DVec3, end: DVec3) -> Self {
        Self::new_line(name, vec![start, end])
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges between consecutive nodes.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[must_use]
    pub fn nodes(&self) -> &[DVec3] {
        &self.nodes
    }

    pub fn set_color(&mut self, color: Vec3) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_dash(&mut self, dash: LineDash) -> &mut Self {
        self.dash = dash;
        self
    }

    pub fn set_hover(&mut self, hover: HoverInfo) -> &mut Self {
        self.hover = hover;
        self
    }

    /// Attaches text labels, drawn at the nodes in order.
    pub fn set_labels<S: Into<String>>(
        &mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the label font color and size.
    pub fn set_label_font(&mut self, color: Vec3, size: f64) -> &mut Self {
        self.label_color = color;
        self.label_size = size;
        self
    }

    pub fn set_label_position(&mut self, position: TextPosition) -> &mut Self {
        self.label_position = position;
        self
    }
}

impl Structure for CurveNetwork {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "CurveNetwork"
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn to_trace(&self) -> Value {
        let (xs, ys, zs) = split_axes(&self.nodes);
        let mode = if self.labels.is_empty() {
            "lines"
        } else {
            "lines+text"
        };

        let mut trace = json!({
            "type": "scatter3d",
            "mode": mode,
            "name": self.name,
            "x": xs,
            "y": ys,
            "z": zs,
            "line": {
                "color": color_to_hex(self.color),
                "width": self.width,
                "dash": self.dash.as_str(),
            },
            "opacity": self.opacity,
            "hoverinfo": self.hover.as_str(),
        });

        if !self.labels.is_empty() {
            trace["text"] = json!(self.labels);
            trace["textfont"] = json!({
                "color": color_to_hex(self.label_color),
                "size": self.label_size,
            });
            trace["textposition"] = json!(self.label_position.as_str());
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_geometry() {
        let seg = CurveNetwork::new_segment("seg", DVec3::ZERO, DVec3::new(0.0, 1.5, 0.0));
        assert_eq!(seg.num_nodes(), 2);
        assert_eq!(seg.num_edges(), 1);
        assert_eq!(seg.nodes()[1], DVec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_empty_line() {
        let line = CurveNetwork::new_line("empty", Vec::new());
        assert_eq!(line.num_edges(), 0);
        assert_eq!(line.to_trace()["x"], json!([]));
    }

    #[test]
    fn test_line_trace() {
        let mut line = CurveNetwork::new_segment(
            "infinite line",
            DVec3::new(-3.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        );
        line.set_width(10.0).set_dash(LineDash::Dash);
        line.set_opacity(0.25);

        let trace = line.to_trace();
        assert_eq!(trace["mode"], "lines");
        assert_eq!(trace["name"], "infinite line");
        assert_eq!(trace["x"], json!([-3.0, 3.0]));
        assert_eq!(trace["line"]["color"], "#ffffff");
        assert_eq!(trace["line"]["width"], json!(10.0));
        assert_eq!(trace["line"]["dash"], "dash");
        assert_eq!(trace["opacity"], json!(0.25));
        assert!(trace.get("text").is_none());
    }

    #[test]
    fn test_labels_switch_mode() {
        let mut line = CurveNetwork::new_segment("el", DVec3::ZERO, DVec3::Y);
        line.set_labels(["dq"])
            .set_label_font(Vec3::ONE, 24.0)
            .set_label_position(TextPosition::MiddleRight)
            .set_hover(HoverInfo::Name);

        let trace = line.to_trace();
        assert_eq!(trace["mode"], "lines+text");
        assert_eq!(trace["text"], json!(["dq"]));
        assert_eq!(trace["textfont"]["size"], json!(24.0));
        assert_eq!(trace["textposition"], "middle right");
        assert_eq!(trace["hoverinfo"], "name");
    }
}
