//! Field sampling on a cylindrical grid around the line charge.
//!
//! The line lies on the x axis. A sample at radius `r` has field magnitude
//! `1/r` and is sorted into one of three [`FieldRegion`]s by its position
//! relative to the y-x plane.

use std::f64::consts::TAU;

use glam::DVec3;
use linefield_core::SamplerOptions;

/// `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// A single step yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` evenly spaced angles over `[0, 2π)`.
pub fn angles(n: usize) -> Vec<f64> {
    (0..n).map(|i| TAU * i as f64 / n as f64).collect()
}

/// Visibility region of a field sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRegion {
    /// Close to the y-x plane, on the positive y side.
    InPlanePositive,
    /// Close to the y-x plane, at or below y = 0.
    InPlaneNegative,
    /// Everything else.
    OutOfPlane,
}

impl FieldRegion {
    /// All regions, in registration order.
    pub const ALL: [FieldRegion; 3] = [
        FieldRegion::InPlanePositive,
        FieldRegion::InPlaneNegative,
        FieldRegion::OutOfPlane,
    ];

    /// Classifies a point. `tolerance` bounds |z| for the in-plane regions.
    pub fn classify(position: DVec3, tolerance: f64) -> Self {
        if position.z.abs() < tolerance {
            if position.y > 0.0 {
                FieldRegion::InPlanePositive
            } else {
                FieldRegion::InPlaneNegative
            }
        } else {
            FieldRegion::OutOfPlane
        }
    }
}

/// One grid sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub position: DVec3,
    pub radius: f64,
    pub magnitude: f64,
    pub size: f64,
    pub region: FieldRegion,
}

/// The full set of samples, in grid order.
#[derive(Debug, Clone, Default)]
pub struct FieldSamples {
    samples: Vec<FieldSample>,
}

impl FieldSamples {
    /// Returns every sample.
    pub fn all(&self) -> &[FieldSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates the samples of one region, keeping grid order.
    pub fn in_region(&self, region: FieldRegion) -> impl Iterator<Item = &FieldSample> {
        self.samples.iter().filter(move |s| s.region == region)
    }

    pub fn count(&self, region: FieldRegion) -> usize {
        self.in_region(region).count()
    }

    pub fn positions(&self, region: FieldRegion) -> Vec<DVec3> {
        self.in_region(region).map(|s| s.position).collect()
    }

    pub fn magnitudes(&self, region: FieldRegion) -> Vec<f64> {
        self.in_region(region).map(|s| s.magnitude).collect()
    }

    pub fn sizes(&self, region: FieldRegion) -> Vec<f64> {
        self.in_region(region).map(|s| s.size).collect()
    }
}

/// Samples the field of the line charge.
///
/// Iterates axial, then radial, then angular, so the result is deterministic.
/// Options are assumed validated; in particular the radial start is positive.
pub fn sample_field(options: &SamplerOptions) -> FieldSamples {
    let radii = linspace(options.radial_range[0], options.radial_range[1], options.radial_steps);
    let thetas = angles(options.angular_steps);
    let xs = linspace(options.axial_range[0], options.axial_range[1], options.axial_steps);

    let mut samples = Vec::with_capacity(options.num_samples());
    for &x in &xs {
        for &r in &radii {
            let magnitude = 1.0 / r;
            for &theta in &thetas {
                let position = DVec3::new(x, r * theta.cos(), r * theta.sin());
                samples.push(FieldSample {
                    position,
                    radius: r,
                    magnitude,
                    size: magnitude * options.marker_size_scale,
                    region: FieldRegion::classify(position, options.in_plane_tolerance),
                });
            }
        }
    }

    let field = FieldSamples { samples };
    log::debug!(
        "sampled {} points: {} in-plane positive, {} in-plane negative, {} out of plane",
        field.len(),
        field.count(FieldRegion::InPlanePositive),
        field.count(FieldRegion::InPlaneNegative),
        field.count(FieldRegion::OutOfPlane),
    );
    field
}
