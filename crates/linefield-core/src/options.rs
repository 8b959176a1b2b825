//! Configuration options for the line-charge figure.
//!
//! Every geometric constant, color and output setting of the figure lives
//! here. [`FigureOptions::default`] reproduces the stock figure.

use std::path::PathBuf;

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{LinefieldError, Result};

/// Top-level figure configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    /// Field sampling grid around the line charge.
    pub sampler: SamplerOptions,

    /// The infinite line itself.
    pub line: LineOptions,

    /// The Gaussian cylinder.
    pub surface: SurfaceOptions,

    /// The finite bar, its charge element and the force vector.
    pub bar: BarOptions,

    /// The mini coordinate axes past the line tip.
    pub axes: AxesOptions,

    /// Fixed viewing camera.
    pub camera: CameraOptions,

    /// Colors.
    pub palette: Palette,

    /// Output document settings.
    pub document: DocumentOptions,
}

/// Cylindrical sampling grid for the field point cloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerOptions {
    /// Radial range, both ends inclusive. The start must be positive.
    pub radial_range: [f64; 2],
    /// Number of radial samples.
    pub radial_steps: usize,
    /// Number of angular samples over [0, 2π), endpoint excluded.
    pub angular_steps: usize,
    /// Axial range along x, both ends inclusive.
    pub axial_range: [f64; 2],
    /// Number of axial samples.
    pub axial_steps: usize,
    /// A sample with |z| below this is in the y-x plane.
    pub in_plane_tolerance: f64,
    /// Marker size per unit field magnitude.
    pub marker_size_scale: f64,
    /// Initial marker opacity of every field cloud.
    pub opacity: f64,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            radial_range: [0.4, 3.0],
            radial_steps: 8,
            angular_steps: 16,
            axial_range: [-2.5, 2.5],
            axial_steps: 8,
            in_plane_tolerance: 0.1,
            marker_size_scale: 8.0,
            opacity: 0.5,
        }
    }
}

impl SamplerOptions {
    /// Total number of grid samples.
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.radial_steps * self.angular_steps * self.axial_steps
    }
}

/// The infinite line charge drawn along the x axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Drawn extent along x.
    pub extent: [f64; 2],
    /// Line width in pixels.
    pub width: f64,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            extent: [-3.0, 3.0],
            width: 10.0,
        }
    }
}

/// The cylindrical Gaussian surface around the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Cylinder radius.
    pub radius: f64,
    /// Axial span along x.
    pub axial_range: [f64; 2],
    /// Mesh rows along x.
    pub axial_steps: usize,
    /// Mesh columns around the axis, seam closed.
    pub angular_steps: usize,
    /// Initial opacity.
    pub opacity: f64,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            axial_range: [-2.0, 2.0],
            axial_steps: 20,
            angular_steps: 40,
            opacity: 0.3,
        }
    }
}

/// The finite bar along y and the differential element on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    /// Distance `d` from the line to the near end of the bar.
    pub offset: f64,
    /// Bar length `L`.
    pub length: f64,
    /// Bar line width.
    pub width: f64,
    /// Initial opacity of the bar, its offset line and labels.
    pub opacity: f64,
    /// Position of the charge element along the bar, as a fraction of `L`.
    pub element_fraction: f64,
    /// Half-height of the charge element slice.
    pub element_half_height: f64,
    /// Length of the force vector.
    pub force_length: f64,
    /// Initial opacity of the charge element and force vector.
    pub element_opacity: f64,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            offset: 1.5,
            length: 2.0,
            width: 8.0,
            opacity: 1.0,
            element_fraction: 1.0 / 3.0,
            element_half_height: 0.08,
            force_length: 0.8,
            element_opacity: 0.0,
        }
    }
}

impl BarOptions {
    /// The y coordinate of the charge element.
    #[must_use]
    pub fn element_y(&self) -> f64 {
        self.offset + self.length * self.element_fraction
    }
}

/// The mini coordinate axes drawn past the tip of the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions {
    /// Common origin of the three axes.
    pub origin: DVec3,
    /// Axis length.
    pub length: f64,
    /// Gap between the axis tip and its label.
    pub label_gap: f64,
    /// Cone size reference.
    pub cone_size: f64,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            origin: DVec3::new(3.2, 0.0, 0.0),
            length: 0.5,
            label_gap: 0.1,
            cone_size: 0.1,
        }
    }
}

/// Fixed camera. The default looks down the z axis with y up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Eye position.
    pub eye: DVec3,
    /// Look-at center.
    pub center: DVec3,
    /// Up direction.
    pub up: DVec3,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 2.0),
            center: DVec3::ZERO,
            up: DVec3::Y,
        }
    }
}

/// Colors used by the figure, RGB in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Lines, bar, labels and axes.
    pub foreground: Vec3,
    /// Force vector and its label.
    pub force: Vec3,
    /// Gaussian surface.
    pub surface: Vec3,
    /// Color map name for field magnitude.
    pub field_color_map: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Vec3::ONE,
            force: Vec3::new(1.0, 85.0 / 255.0, 85.0 / 255.0),
            surface: Vec3::ONE,
            field_color_map: "matter".to_string(),
        }
    }
}

/// Output document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Output path.
    pub output_file: PathBuf,
    /// Plotly runtime URL.
    pub plotly_url: String,
    /// `MathJax` URL.
    pub mathjax_url: String,
    /// Inline style added to the `<body>` tag by the post-processor.
    pub body_style: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("final_interactive.html"),
            plotly_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
            mathjax_url:
                "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.5/MathJax.js?config=TeX-AMS-MML_SVG"
                    .to_string(),
            body_style: "margin: 0; padding: 0; background-color: transparent; overflow: hidden;"
                .to_string(),
        }
    }
}

impl FigureOptions {
    /// Checks that every option is in range.
    pub fn validate(&self) -> Result<()> {
        let s = &self.sampler;
        check_range("sampler.radial_range", s.radial_range)?;
        // The field is 1/r.
        if s.radial_range[0] <= 0.0 {
            return invalid("sampler.radial_range must start above zero");
        }
        check_range("sampler.axial_range", s.axial_range)?;
        check_steps("sampler.radial_steps", s.radial_steps)?;
        check_steps("sampler.angular_steps", s.angular_steps)?;
        check_steps("sampler.axial_steps", s.axial_steps)?;
        check_positive("sampler.in_plane_tolerance", s.in_plane_tolerance)?;
        check_positive("sampler.marker_size_scale", s.marker_size_scale)?;
        check_opacity("sampler.opacity", s.opacity)?;

        check_range("line.extent", self.line.extent)?;
        check_positive("line.width", self.line.width)?;

        let surface = &self.surface;
        check_positive("surface.radius", surface.radius)?;
        check_range("surface.axial_range", surface.axial_range)?;
        // A closed seam needs at least two columns.
        if surface.axial_steps < 2 || surface.angular_steps < 2 {
            return invalid("surface mesh needs at least 2 steps per direction");
        }
        check_opacity("surface.opacity", surface.opacity)?;

        let bar = &self.bar;
        check_positive("bar.offset", bar.offset)?;
        check_positive("bar.length", bar.length)?;
        check_positive("bar.width", bar.width)?;
        check_positive("bar.element_half_height", bar.element_half_height)?;
        check_positive("bar.force_length", bar.force_length)?;
        if !(0.0..=1.0).contains(&bar.element_fraction) {
            return invalid("bar.element_fraction must be in [0, 1]");
        }
        check_opacity("bar.opacity", bar.opacity)?;
        check_opacity("bar.element_opacity", bar.element_opacity)?;

        if !self.axes.origin.is_finite() {
            return invalid("axes.origin must be finite");
        }
        check_positive("axes.length", self.axes.length)?;
        check_positive("axes.cone_size", self.axes.cone_size)?;

        if !(self.camera.eye.is_finite() && self.camera.center.is_finite()) {
            return invalid("camera position must be finite");
        }
        if self.camera.up.length_squared() == 0.0 {
            return invalid("camera.up must be non-zero");
        }

        if self.document.output_file.as_os_str().is_empty() {
            return invalid("document.output_file must not be empty");
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Result<()> {
    Err(LinefieldError::InvalidOption(message.to_string()))
}

fn check_range(name: &str, range: [f64; 2]) -> Result<()> {
    if range[0].is_finite() && range[1].is_finite() && range[0] < range[1] {
        Ok(())
    } else {
        Err(LinefieldError::InvalidOption(format!(
            "{name} must be a finite, increasing range, got {range:?}"
        )))
    }
}

fn check_steps(name: &str, steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(LinefieldError::InvalidOption(format!(
            "{name} must be at least 1"
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LinefieldError::InvalidOption(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn check_opacity(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LinefieldError::InvalidOption(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
