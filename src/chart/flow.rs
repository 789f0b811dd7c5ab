//! Standalone SVG for the flow-band chart

use std::fmt::Write;

use crate::data::{Campaign, PhaseKind};
use crate::geometry::{BandGeometry, DotLayer, FlowChartGeometry, path_data, points_attr};
use crate::interact::TooltipPayload;

use super::colors::Theme;
use super::escape_xml;

/// Render the flow chart as an SVG document.
///
/// Every dot carries a `<title>` with its tooltip text, so hovering in a
/// browser shows the same annotation the interactive surface would.
pub fn render_flow_svg(geometry: &FlowChartGeometry, campaign: &Campaign, theme: &Theme) -> String {
    let layout = &geometry.layout;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg viewBox="0 0 {w} {h}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="Georgia, serif">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(
        out,
        "  <title>Napoleon's march on Moscow: troop strength and temperature</title>"
    );

    let _ = writeln!(out, "  <defs>");
    for (id, top, bottom) in [
        ("advance-fill", theme.advance_top, theme.advance_bottom),
        ("retreat-fill", theme.retreat_top, theme.retreat_bottom),
    ] {
        let _ = writeln!(
            out,
            r#"    <linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{top}"/><stop offset="1" stop-color="{bottom}"/></linearGradient>"#
        );
    }
    let _ = writeln!(out, "  </defs>");

    let _ = writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        layout.width, layout.height, theme.card
    );

    write_band(&mut out, &geometry.advance, theme);
    write_band(&mut out, &geometry.retreat, theme);

    for (top, bottom) in &geometry.connectors {
        let _ = writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="0.8" stroke-dasharray="2,3" opacity="0.6"/>"#,
            top.x, top.y, bottom.x, bottom.y, theme.muted
        );
    }

    write_city_labels(&mut out, geometry, campaign, theme);
    write_phase_tags(&mut out, geometry, theme);
    write_temperature(&mut out, geometry, theme);
    write_legend(&mut out, geometry, theme);

    for dot in &geometry.dots {
        let (fill, stroke) = match (dot.layer, dot.waypoint.phase) {
            (DotLayer::Temperature, _) => (theme.temperature, theme.card),
            (DotLayer::Band, PhaseKind::Advance) => (theme.advance_bottom, theme.text),
            (DotLayer::Band, PhaseKind::Retreat) => (theme.retreat_top, theme.text),
        };
        let tooltip = TooltipPayload::from_waypoint(campaign, dot.waypoint)
            .map(|p| {
                let mut lines = vec![p.title()];
                lines.extend(p.lines());
                escape_xml(&lines.join("\n"))
            })
            .unwrap_or_default();
        let _ = writeln!(
            out,
            r#"  <circle class="dot {phase}" cx="{:.2}" cy="{:.2}" r="{}" fill="{fill}" stroke="{stroke}" stroke-width="1"><title>{tooltip}</title></circle>"#,
            dot.center.x,
            dot.center.y,
            dot.radius,
            phase = dot.waypoint.phase,
        );
    }

    out.push_str("</svg>\n");
    out
}

fn write_band(out: &mut String, band: &BandGeometry, theme: &Theme) {
    let phase = band.phase;
    let _ = writeln!(
        out,
        r#"  <polygon class="band {phase}" points="{}" fill="url(#{phase}-fill)" opacity="0.9"/>"#,
        points_attr(&band.polygon)
    );
    let edge = match phase {
        PhaseKind::Advance => theme.advance_top,
        PhaseKind::Retreat => theme.retreat_top,
    };
    let _ = writeln!(
        out,
        r#"  <polyline class="edge {phase}" points="{}" fill="none" stroke="{edge}" stroke-width="1.5"/>"#,
        points_attr(&band.taper)
    );
}

/// City names above the advance band's outer edge
fn write_city_labels(
    out: &mut String,
    geometry: &FlowChartGeometry,
    campaign: &Campaign,
    theme: &Theme,
) {
    let waypoints = campaign.advance().waypoints();
    let last = waypoints.len().saturating_sub(1);
    for (i, (wp, p)) in waypoints.iter().zip(&geometry.advance.taper).enumerate() {
        let anchor = match i {
            0 => "start",
            i if i == last => "end",
            _ => "middle",
        };
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" text-anchor="{anchor}" fill="{}" font-size="9">{}</text>"#,
            p.x,
            p.y - 5.0,
            theme.accent,
            escape_xml(&wp.label)
        );
    }
}

fn write_phase_tags(out: &mut String, geometry: &FlowChartGeometry, theme: &Theme) {
    let x = geometry.layout.chart_left() - 6.0;
    let tags = [
        ("ADV", geometry.advance.baseline_y - 4.0),
        ("RET", geometry.retreat.baseline_y + 10.0),
    ];
    for (tag, y) in tags {
        let _ = writeln!(
            out,
            r#"  <text x="{x:.2}" y="{y:.2}" text-anchor="end" fill="{}" font-size="8" letter-spacing="1">{tag}</text>"#,
            theme.muted
        );
    }
}

/// Swatch row along the bottom edge
fn write_legend(out: &mut String, geometry: &FlowChartGeometry, theme: &Theme) {
    let y = geometry.layout.height - 10.0;
    let mut x = geometry.layout.chart_left();
    for (name, color) in [
        ("Advance", theme.advance_top),
        ("Retreat", theme.retreat_top),
        ("Temperature", theme.temperature),
    ] {
        let _ = writeln!(
            out,
            r#"  <g class="legend"><rect x="{x:.2}" y="{:.2}" width="14" height="6" fill="{color}"/><text x="{:.2}" y="{y:.2}" fill="{}" font-size="8">{name}</text></g>"#,
            y - 6.0,
            x + 18.0,
            theme.muted
        );
        x += 90.0;
    }
}

/// Ticks, filled area and line of the temperature strip
fn write_temperature(out: &mut String, geometry: &FlowChartGeometry, theme: &Theme) {
    let layout = &geometry.layout;
    let left = layout.chart_left();
    let right = layout.chart_right();

    let _ = writeln!(
        out,
        r#"  <text x="{left:.2}" y="{:.2}" fill="{}" font-size="8" letter-spacing="1">TEMPERATURE (°C)</text>"#,
        layout.temp_top - 6.0,
        theme.muted
    );

    let mid = (layout.temp_min + layout.temp_max) / 2.0;
    for celsius in [layout.temp_max, mid, layout.temp_min] {
        let y = geometry.scale.temp_y(celsius);
        let _ = writeln!(
            out,
            r#"  <line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}" stroke="{}" stroke-width="0.5" stroke-dasharray="3,3"/>"#,
            theme.grid
        );
        let _ = writeln!(
            out,
            r#"  <text class="tick" x="{:.2}" y="{:.2}" text-anchor="end" fill="{}" font-size="8">{celsius}°</text>"#,
            left - 6.0,
            y + 3.0,
            theme.muted
        );
    }

    let curve = &geometry.temperature;
    if curve.is_empty() {
        return;
    }
    if let Some(area) = curve.area_path() {
        let _ = writeln!(
            out,
            r#"  <path class="temperature-area" d="{area}" fill="{}" opacity="0.15"/>"#,
            theme.temperature
        );
    }
    let _ = writeln!(
        out,
        r#"  <path class="temperature-line" d="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        path_data(&curve.points, false),
        theme.temperature
    );
}
