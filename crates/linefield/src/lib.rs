//! linefield: the electric field of a line charge as an interactive figure.
//!
//! The figure is a standalone Plotly page meant to be embedded in an
//! `<iframe>`. The host page animates it by posting scroll messages:
//!
//! ```js
//! iframe.contentWindow.postMessage({ type: 'scroll', barOpacity: 0.4 }, '*');
//! ```
//!
//! Each message field drives the opacity of one layer of the figure.
//!
//! # Quick Start
//!
//! ```no_run
//! fn main() -> linefield::Result<()> {
//!     let report = linefield::generate()?;
//!     println!("wrote {}", report.output.display());
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! 1. [`sampler`] samples the field on a cylindrical grid.
//! 2. [`figure`] registers every primitive in trace order and declares the
//!    animation groups.
//! 3. [`PlotDocument`] writes the page.
//! 4. [`patch_file`] styles the `<body>` and injects the scroll listener.

// Figure code intentionally uses casts for indices and grid steps
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod figure;
pub mod sampler;

use std::path::PathBuf;

pub use linefield_core::{
    error::{LinefieldError, Result},
    group::{Group, LayerBinding},
    options::{
        AxesOptions, BarOptions, CameraOptions, DocumentOptions, FigureOptions, LineOptions,
        Palette, SamplerOptions, SurfaceOptions,
    },
    registry::Registry,
    scene::Scene,
    structure::Structure,
    DVec3, Vec3,
};

pub use linefield_render::{
    listener_script, patch_file, patch_html, Camera, ColorMap, ColorMapRegistry, PatchOutcome,
    PlotDocument, RenderError, LISTENER_SCRIPT_ID,
};

pub use linefield_structures::{
    CurveNetwork, DirectionMarker, HoverInfo, LineDash, PointCloud, SurfaceGrid, TextLabels,
    TextPosition,
};

pub use figure::build_scene;
pub use sampler::{sample_field, FieldRegion, FieldSample, FieldSamples};

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct FigureReport {
    /// Path of the written document.
    pub output: PathBuf,
    /// Number of Plotly traces in the document.
    pub num_traces: usize,
    /// Message field to trace index mapping embedded in the listener.
    pub bindings: Vec<LayerBinding>,
    /// Edits applied by the post-processor.
    pub patch: PatchOutcome,
}

/// Generates the figure with default options into `final_interactive.html`.
pub fn generate() -> Result<FigureReport> {
    generate_with_options(&FigureOptions::default())
}

/// Generates the figure for `options`.
///
/// Builds the scene, writes the document, then patches it in place.
pub fn generate_with_options(options: &FigureOptions) -> Result<FigureReport> {
    let scene = build_scene(options)?;
    let output = options.document.output_file.clone();

    PlotDocument::from_scene(&scene)
        .write(&output)
        .map_err(|e| LinefieldError::RenderError(format!("failed to write document: {e}")))?;

    let bindings = scene.layer_bindings();
    let patch = patch_file(&output, &options.document.body_style, &bindings)
        .map_err(|e| LinefieldError::RenderError(format!("failed to patch document: {e}")))?;

    log::info!("interactive figure saved to {}", output.display());
    Ok(FigureReport {
        output,
        num_traces: scene.num_traces(),
        bindings,
        patch,
    })
}
