//! Scene construction for the line-charge figure.
//!
//! Registration order is the Plotly trace order, which the scroll listener
//! addresses by index. Reordering the `register` calls below changes the
//! page contract.

use std::f64::consts::TAU;

use glam::DVec3;
use linefield_core::{FigureOptions, Group, Result, Scene, Structure};
use linefield_render::ColorMapRegistry;
use linefield_structures::{
    CurveNetwork, DirectionMarker, HoverInfo, LineDash, PointCloud, SurfaceGrid, TextLabels,
    TextPosition,
};

use crate::sampler::{linspace, sample_field, FieldRegion};

pub const INFINITE_LINE: &str = "infinite line";
pub const FIELD_POSITIVE: &str = "field in-plane positive";
pub const FIELD_NEGATIVE: &str = "field in-plane negative";
pub const FIELD_OUT_OF_PLANE: &str = "field out-of-plane";
pub const GAUSSIAN_SURFACE: &str = "gaussian surface";
pub const BAR: &str = "bar";
pub const BAR_OFFSET: &str = "bar offset";
pub const BAR_LABELS: &str = "bar labels";
pub const CHARGE_ELEMENT: &str = "charge element";
pub const FORCE_VECTOR: &str = "force vector";
pub const FORCE_ARROWHEAD: &str = "force arrowhead";
pub const FORCE_LABEL: &str = "force label";

/// Message fields understood by the scroll listener.
pub mod fields {
    pub const FIELD_POSITIVE: &str = "fieldPosOpacity";
    pub const FIELD_NEGATIVE: &str = "fieldNegOpacity";
    pub const FIELD_OUT_OF_PLANE: &str = "fieldOutOpacity";
    pub const SURFACE: &str = "cylOpacity";
    pub const BAR: &str = "barOpacity";
    pub const CHARGE_ELEMENT: &str = "dqOpacity";
}

/// Builds the complete scene for `options`.
///
/// Options are validated first. Fails if a name is registered twice or a
/// group refers to a structure that does not exist.
pub fn build_scene(options: &FigureOptions) -> Result<Scene> {
    options.validate()?;
    let mut scene = Scene::new(options.clone());

    add_line(&mut scene, options)?;
    add_field(&mut scene, options)?;
    add_surface(&mut scene, options)?;
    add_bar(&mut scene, options)?;
    add_charge_element(&mut scene, options)?;
    add_axes(&mut scene, options)?;
    add_groups(&mut scene)?;

    for binding in scene.layer_bindings() {
        log::debug!(
            "layer {:?}: {} -> {:?} via {:?}",
            binding.group,
            binding.message_field,
            binding.indices,
            binding.restyle_keys
        );
    }
    Ok(scene)
}

fn add_line(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let [x0, x1] = options.line.extent;
    let mut line = CurveNetwork::new_segment(
        INFINITE_LINE,
        DVec3::new(x0, 0.0, 0.0),
        DVec3::new(x1, 0.0, 0.0),
    );
    line.set_color(options.palette.foreground)
        .set_width(options.line.width);
    scene.register(line)?;
    Ok(())
}

fn add_field(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let field = sample_field(&options.sampler);
    let color_map = ColorMapRegistry::new().get_or_default(&options.palette.field_color_map);

    let clouds = [
        (FIELD_POSITIVE, FieldRegion::InPlanePositive),
        (FIELD_NEGATIVE, FieldRegion::InPlaneNegative),
        (FIELD_OUT_OF_PLANE, FieldRegion::OutOfPlane),
    ];
    for (name, region) in clouds {
        let mut cloud = PointCloud::new(name, field.positions(region));
        cloud
            .add_scalar_quantity("magnitude", field.magnitudes(region), color_map.clone())?
            .add_size_quantity("size", field.sizes(region))?;
        cloud.set_opacity(options.sampler.opacity);
        scene.register(cloud)?;
    }
    Ok(())
}

fn add_surface(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let s = &options.surface;
    let xs = linspace(s.axial_range[0], s.axial_range[1], s.axial_steps);
    // Seam closed: the last column repeats the first.
    let thetas = linspace(0.0, TAU, s.angular_steps);
    let radius = s.radius;

    let mut surface = SurfaceGrid::from_parametric(GAUSSIAN_SURFACE, &xs, &thetas, |x, theta| {
        DVec3::new(x, radius * theta.cos(), radius * theta.sin())
    });
    surface.set_color(options.palette.surface);
    surface.set_opacity(s.opacity);
    scene.register(surface)?;
    Ok(())
}

fn add_bar(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let bar = &options.bar;
    let fg = options.palette.foreground;
    let (d, l) = (bar.offset, bar.length);

    let mut rod = CurveNetwork::new_segment(BAR, DVec3::new(0.0, d, 0.0), DVec3::new(0.0, d + l, 0.0));
    rod.set_color(fg).set_width(bar.width).set_hover(HoverInfo::Name);
    rod.set_opacity(bar.opacity);
    scene.register(rod)?;

    let mut offset = CurveNetwork::new_segment(BAR_OFFSET, DVec3::ZERO, DVec3::new(0.0, d, 0.0));
    offset.set_color(fg).set_width(3.0).set_dash(LineDash::Dash);
    offset.set_opacity(bar.opacity);
    scene.register(offset)?;

    let mut labels = TextLabels::new(
        BAR_LABELS,
        vec![DVec3::new(0.0, d / 2.0, 0.4), DVec3::new(0.0, d + l / 2.0, 0.4)],
        ["d", "L"],
    )?;
    labels.set_font(fg, 20.0);
    labels.set_opacity(bar.opacity);
    scene.register(labels)?;
    Ok(())
}

fn add_charge_element(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let bar = &options.bar;
    let palette = &options.palette;
    let y = bar.element_y();
    let h = bar.element_half_height;
    let tip = DVec3::new(0.0, y + bar.force_length, 0.0);

    let mut element = CurveNetwork::new_segment(
        CHARGE_ELEMENT,
        DVec3::new(0.0, y - h, 0.0),
        DVec3::new(0.0, y + h, 0.0),
    );
    element
        .set_color(palette.foreground)
        .set_width(14.0)
        .set_labels(["dq"])
        .set_label_font(palette.foreground, 24.0)
        .set_label_position(TextPosition::MiddleRight)
        .set_hover(HoverInfo::Name);
    element.set_opacity(bar.element_opacity);
    scene.register(element)?;

    let mut vector = CurveNetwork::new_segment(FORCE_VECTOR, DVec3::new(0.0, y, 0.0), tip);
    vector
        .set_color(palette.force)
        .set_width(6.0)
        .set_hover(HoverInfo::Name);
    vector.set_opacity(bar.element_opacity);
    scene.register(vector)?;

    let mut head = DirectionMarker::new(FORCE_ARROWHEAD, tip, DVec3::Y);
    head.set_size(0.15).set_color(palette.force);
    head.set_opacity(bar.element_opacity);
    scene.register(head)?;

    let mut label = TextLabels::new(
        FORCE_LABEL,
        vec![DVec3::new(0.0, y + bar.force_length / 2.0, 0.2)],
        ["dF"],
    )?;
    label.set_font(palette.force, 18.0);
    label.set_opacity(bar.element_opacity);
    scene.register(label)?;
    Ok(())
}

fn add_axes(scene: &mut Scene, options: &FigureOptions) -> Result<()> {
    let axes = &options.axes;
    let fg = options.palette.foreground;

    for (axis, direction) in [("x", DVec3::X), ("y", DVec3::Y), ("z", DVec3::Z)] {
        let end = axes.origin + direction * axes.length;

        let mut line = CurveNetwork::new_segment(format!("axis {axis}"), axes.origin, end);
        line.set_color(fg).set_width(4.0);
        scene.register(line)?;

        let mut head = DirectionMarker::new(format!("axis {axis} arrowhead"), end, direction);
        head.set_size(axes.cone_size).set_color(fg);
        scene.register(head)?;

        let mut label = TextLabels::new(
            format!("axis {axis} label"),
            vec![end + direction * axes.label_gap],
            [axis.to_uppercase()],
        )?;
        label.set_font(fg, 12.0);
        scene.register(label)?;
    }
    Ok(())
}

fn add_groups(scene: &mut Scene) -> Result<()> {
    let marker_opacity = ["marker.opacity"];
    let opacity = ["opacity"];

    scene.add_group(
        Group::new("field positive", fields::FIELD_POSITIVE)
            .with_restyle_keys(&marker_opacity)
            .with_member(FIELD_POSITIVE),
    )?;
    scene.add_group(
        Group::new("field negative", fields::FIELD_NEGATIVE)
            .with_restyle_keys(&marker_opacity)
            .with_member(FIELD_NEGATIVE),
    )?;
    scene.add_group(
        Group::new("field out-of-plane", fields::FIELD_OUT_OF_PLANE)
            .with_restyle_keys(&marker_opacity)
            .with_member(FIELD_OUT_OF_PLANE),
    )?;
    scene.add_group(
        Group::new("gaussian surface", fields::SURFACE)
            .with_restyle_keys(&opacity)
            .with_member(GAUSSIAN_SURFACE),
    )?;
    scene.add_group(
        Group::new("finite bar", fields::BAR)
            .with_restyle_keys(&opacity)
            .with_member(BAR)
            .with_member(BAR_OFFSET)
            .with_member(BAR_LABELS),
    )?;
    scene.add_group(
        Group::new("charge element", fields::CHARGE_ELEMENT)
            .with_restyle_keys(&["opacity", "marker.opacity"])
            .with_member(CHARGE_ELEMENT)
            .with_member(FORCE_VECTOR)
            .with_member(FORCE_ARROWHEAD)
            .with_member(FORCE_LABEL),
    )?;
    Ok(())
}
