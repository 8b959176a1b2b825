//! Core abstractions for linefield.
//!
//! This crate provides the fundamental traits and types used throughout linefield:
//! - [`Structure`] trait for drawable primitives (point clouds, lines, surfaces, ...)
//! - [`Quantity`] trait for per-element data attached to structures
//! - The ordered [`Registry`] and the [`Scene`] that owns it
//! - Animation [`Group`]s resolved to [`LayerBinding`]s
//! - [`FigureOptions`] configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod group;
pub mod options;
pub mod quantity;
pub mod registry;
pub mod scene;
pub mod structure;

pub use error::{LinefieldError, Result};
pub use group::{Group, LayerBinding};
pub use options::{
    AxesOptions, BarOptions, CameraOptions, DocumentOptions, FigureOptions, LineOptions, Palette,
    SamplerOptions, SurfaceOptions,
};
pub use quantity::Quantity;
pub use registry::Registry;
pub use scene::Scene;
pub use structure::Structure;

// Re-export glam types for convenience
pub use glam::{DVec3, Vec3};
