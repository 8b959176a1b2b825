//! Structure implementations for linefield.
//!
//! Each structure serializes to exactly one Plotly trace:
//! - Point clouds (markers, optionally colored and sized per point)
//! - Curve networks (polylines, optionally labeled)
//! - Surface grids (parametric surfaces)
//! - Direction markers (cones)
//! - Text labels

// Figure code intentionally uses casts for indices and colors
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod curve_network;
pub mod direction_marker;
pub mod point_cloud;
pub mod style;
pub mod surface_grid;
pub mod text_labels;

pub use curve_network::CurveNetwork;
pub use direction_marker::DirectionMarker;
pub use point_cloud::{PointCloud, PointCloudScalarQuantity, PointCloudSizeQuantity};
pub use style::{HoverInfo, LineDash, TextPosition};
pub use surface_grid::SurfaceGrid;
pub use text_labels::TextLabels;
