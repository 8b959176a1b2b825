//! HTML backend for linefield.
//!
//! This crate provides:
//! - Color maps and CSS color conversion for Plotly traces
//! - The fixed scene camera
//! - [`PlotDocument`], which writes a scene as a self-contained Plotly page
//! - The post-processing pass that injects the scroll listener

// Figure code intentionally uses casts for colors and indices
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod color_maps;
pub mod document;
pub mod error;
pub mod patch;

pub use camera::Camera;
pub use color_maps::{color_to_hex, ColorMap, ColorMapRegistry};
pub use document::{plot_config, scene_layout, PlotDocument, PLOT_DIV_CLASS};
pub use error::{RenderError, RenderResult};
pub use patch::{listener_script, patch_file, patch_html, PatchOutcome, LISTENER_SCRIPT_ID};
