//! Plotly HTML document writer.
//!
//! Turns a [`Scene`] into a self-contained HTML page: the Plotly and `MathJax`
//! runtimes come from a CDN, while traces, layout and config are embedded
//! inline as JSON. Output is deterministic for a given scene, including the
//! plot `div` id, which derives from the output file name.

use std::fmt::Write as _;
use std::path::Path;

use linefield_core::Scene;
use serde_json::{json, Value};

use crate::camera::Camera;
use crate::error::RenderResult;

/// Fully transparent CSS color used for every background.
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// CSS class Plotly gives its container; the scroll listener looks it up.
pub const PLOT_DIV_CLASS: &str = "plotly-graph-div";

/// Builder for a single-plot HTML document.
#[derive(Debug, Clone)]
pub struct PlotDocument {
    title: String,
    div_id: String,
    plotly_url: String,
    mathjax_url: Option<String>,
    traces: Vec<Value>,
    layout: Value,
    config: Value,
}

impl PlotDocument {
    /// Creates an empty document.
    pub fn new(title: &str, div_id: &str, plotly_url: &str) -> Self {
        Self {
            title: title.to_string(),
            div_id: div_id.to_string(),
            plotly_url: plotly_url.to_string(),
            mathjax_url: None,
            traces: Vec::new(),
            layout: json!({}),
            config: plot_config(),
        }
    }

    /// Builds the document for a scene, named after its output file.
    pub fn from_scene(scene: &Scene) -> Self {
        let document = &scene.options.document;
        let file_name = document
            .output_file
            .file_name()
            .map_or_else(|| "figure".to_string(), |n| n.to_string_lossy().into_owned());

        let mut doc = Self::new(
            &file_name,
            &div_id_for(&document.output_file),
            &document.plotly_url,
        );
        doc.set_mathjax_url(&document.mathjax_url);
        doc.set_traces(scene.traces());
        doc.set_layout(scene_layout(scene));
        doc
    }

    /// Loads `MathJax` from the given URL. An empty URL disables it.
    pub fn set_mathjax_url(&mut self, url: &str) {
        self.mathjax_url = (!url.is_empty()).then(|| url.to_string());
    }

    pub fn set_traces(&mut self, traces: Vec<Value>) {
        self.traces = traces;
    }

    pub fn set_layout(&mut self, layout: Value) {
        self.layout = layout;
    }

    /// Returns the id of the plot container.
    pub fn div_id(&self) -> &str {
        &self.div_id
    }

    /// Returns the number of embedded traces.
    pub fn num_traces(&self) -> usize {
        self.traces.len()
    }

    /// Render the complete HTML document.
    pub fn render(&self) -> RenderResult<String> {
        let data = script_json(&Value::Array(self.traces.clone()))?;
        let layout = script_json(&self.layout)?;
        let config = script_json(&self.config)?;

        let mut html = String::with_capacity(data.len() + 4096);

        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
</head>
<body>
    <div>
        <script type="text/javascript">window.PlotlyConfig = {{MathJaxConfig: 'local'}};</script>
"#,
            title = escape_html(&self.title)
        );

        if let Some(url) = &self.mathjax_url {
            let _ = writeln!(
                html,
                r#"        <script src="{}"></script>"#,
                escape_html(url)
            );
        }

        let _ = write!(
            html,
            r#"        <script charset="utf-8" src="{plotly}"></script>
        <div id="{id}" class="{class}" style="height:100%; width:100%;"></div>
        <script type="text/javascript">
            window.PLOTLYENV = window.PLOTLYENV || {{}};
            if (document.getElementById("{id}")) {{
                Plotly.newPlot("{id}", {data}, {layout}, {config});
            }}
        </script>
    </div>
</body>
</html>
"#,
            plotly = escape_html(&self.plotly_url),
            id = self.div_id,
            class = PLOT_DIV_CLASS,
        );

        Ok(html)
    }

    /// Renders the document and writes it to `path`. Returns the byte count.
    pub fn write(&self, path: &Path) -> RenderResult<usize> {
        let html = self.render()?;
        std::fs::write(path, &html)?;
        log::info!(
            "wrote {} ({} traces, {} bytes)",
            path.display(),
            self.traces.len(),
            html.len()
        );
        Ok(html.len())
    }
}

/// Builds the Plotly layout: fixed camera, hidden axes, transparent backgrounds.
pub fn scene_layout(scene: &Scene) -> Value {
    let hidden_axis = json!({ "visible": false });
    json!({
        "paper_bgcolor": TRANSPARENT,
        "plot_bgcolor": TRANSPARENT,
        "scene": {
            "xaxis": hidden_axis,
            "yaxis": hidden_axis,
            "zaxis": hidden_axis,
            "aspectmode": "data",
            "bgcolor": TRANSPARENT,
            "camera": Camera::from_options(&scene.options.camera).to_plotly(),
            "dragmode": "orbit",
        },
        "margin": { "l": 0, "r": 0, "b": 0, "t": 0 },
        "showlegend": false,
        "autosize": true,
    })
}

/// Plotly runtime config for the page.
pub fn plot_config() -> Value {
    json!({
        "displayModeBar": true,
        "responsive": true,
        "scrollZoom": true,
        "staticPlot": false,
    })
}

/// Derives a stable element id from a file name.
///
/// Characters outside `[A-Za-z0-9_-]` become `-`.
pub fn div_id_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let id: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    if id.is_empty() {
        "linefield-plot".to_string()
    } else {
        id
    }
}

/// Serializes JSON for embedding inside a `<script>` element.
fn script_json(value: &Value) -> RenderResult<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
