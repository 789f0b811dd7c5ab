use colored::*;

use minard::data::{Campaign, PhaseKind};
use minard::geometry::{BandGeometry, ChartLayout, FlowChartGeometry, Point};
use minard::interact::{SurfaceEvent, TooltipPayload, format_count};
use minard::panel::{ArmyBar, ChartTab, CombinedPoint, Panel, RoutePoint, TemperaturePoint};

/// Width of the stop / date column
const LABEL_WIDTH: usize = 12;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

fn style_phase(phase: PhaseKind) -> ColoredString {
    let text = format!("{:<8}", phase.as_str());
    match phase {
        PhaseKind::Advance => text.yellow(),
        PhaseKind::Retreat => text.red(),
    }
}

fn style_celsius(celsius: f64) -> ColoredString {
    let text = format!("{:>7.2}", celsius);
    if celsius < 0.0 { text.cyan() } else { text.normal() }
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_campaign_info(source: &str, campaign: &Campaign, layout: &ChartLayout) {
    println!("Dataset: {}", source);
    println!(
        "Advance: {} stops, Retreat: {} stops, Max troops: {}",
        campaign.advance().len(),
        campaign.retreat().len(),
        format_count(campaign.max_magnitude())
    );
    println!(
        "Layout: {:.0}x{:.0}, anchor {:?}, x-axis {:?}",
        layout.width, layout.height, layout.anchor, layout.x_axis
    );
    println!();
}

/// Data table for a panel, headed "[<Tab title>]"
pub(crate) fn print_panel(panel: &Panel, campaign: &Campaign) {
    println!("[{}]", panel.tab().title());
    match panel {
        Panel::ArmySize(bars) => print_army_table(bars),
        Panel::Route { advance, retreat } => print_route_table(advance, retreat),
        Panel::Temperature(points) => print_temperature_table(points),
        Panel::Combined(points) => print_combined_table(points),
        Panel::ModernMinard(geometry) => print_flow_table(geometry, campaign),
    }
}

fn print_army_table(bars: &[ArmyBar]) {
    println!("{:<LABEL_WIDTH$} {:<8} {:>9}", "STOP", "PHASE", "TROOPS");
    print_separator(LABEL_WIDTH + 19);
    for bar in bars {
        println!(
            "{:<LABEL_WIDTH$} {} {:>9}",
            bar.label,
            style_phase(bar.phase),
            format_count(bar.troops)
        );
    }
}

fn print_route_table(advance: &[RoutePoint], retreat: &[RoutePoint]) {
    println!("{:<LABEL_WIDTH$} {:<8} {:>6} {:>6}", "STOP", "PHASE", "LON", "LAT");
    print_separator(LABEL_WIDTH + 23);
    for (phase, points) in [(PhaseKind::Advance, advance), (PhaseKind::Retreat, retreat)] {
        for p in points {
            println!(
                "{:<LABEL_WIDTH$} {} {:>6.1} {:>6.1}",
                p.label,
                style_phase(phase),
                p.lon,
                p.lat
            );
        }
    }
}

fn print_temperature_table(points: &[TemperaturePoint]) {
    println!("{:<LABEL_WIDTH$} {:>6} {:>7}", "DATE", "°Ré", "°C");
    print_separator(LABEL_WIDTH + 15);
    for p in points {
        println!(
            "{:<LABEL_WIDTH$} {:>6.1} {}",
            p.date,
            p.reaumur,
            style_celsius(p.celsius)
        );
    }
}

fn print_combined_table(points: &[CombinedPoint]) {
    println!("{:<LABEL_WIDTH$} {:>9} {:>7}", "STOP", "TROOPS", "°C");
    print_separator(LABEL_WIDTH + 18);
    for p in points {
        match p.celsius {
            Some(c) => println!(
                "{:<LABEL_WIDTH$} {:>9} {}",
                p.label,
                format_count(p.troops),
                style_celsius(c)
            ),
            None => println!(
                "{:<LABEL_WIDTH$} {:>9} {:>7}",
                p.label,
                format_count(p.troops),
                "-"
            ),
        }
    }
}

/// Per-waypoint band geometry, each phase in travel order
fn print_flow_table(geometry: &FlowChartGeometry, campaign: &Campaign) {
    println!(
        "{:<LABEL_WIDTH$} {:<8} {:>9} {:>7} {:>7} {:>7}",
        "STOP", "PHASE", "TROOPS", "X", "HEIGHT", "°C"
    );
    print_separator(LABEL_WIDTH + 43);
    for kind in [PhaseKind::Advance, PhaseKind::Retreat] {
        let phase = campaign.phase(kind);
        let band = geometry.band(kind);
        for i in phase.travel_order() {
            let wp = &phase.waypoints()[i];
            let celsius = wp
                .temperature
                .map(|t| style_celsius(t.celsius()).to_string())
                .unwrap_or_else(|| format!("{:>7}", "-"));
            println!(
                "{:<LABEL_WIDTH$} {} {:>9} {:>7.2} {:>7.2} {}",
                wp.label,
                style_phase(kind),
                format_count(wp.magnitude),
                band.taper[i].x,
                band.heights[i],
                celsius
            );
        }
    }
}

pub(crate) fn print_polygon(band: &BandGeometry) {
    println!(
        "[{} polygon] {} points, baseline y={:.2}",
        band.phase,
        band.polygon.len(),
        band.baseline_y
    );
    for (i, p) in band.polygon.iter().enumerate() {
        println!("  {:>2}  {:>8.2} {:>8.2}", i, p.x, p.y);
    }
}

pub(crate) fn print_pointer(pointer: Point) {
    println!("{} ({:.1}, {:.1})", style_label("pointer"), pointer.x, pointer.y);
}

pub(crate) fn print_tooltip(payload: &TooltipPayload) {
    println!("  {}", style_label(&payload.title()));
    for line in payload.lines() {
        println!("    {}", line);
    }
}

/// One line per surface notification
pub(crate) fn print_event(event: &SurfaceEvent) {
    match event {
        SurfaceEvent::TabChanged(tab) => {
            println!("  {} tab -> {}", "~".dimmed(), tab.title());
        }
        SurfaceEvent::HoverChanged(Some(payload)) => {
            println!(
                "  {} hover -> {} ({})",
                "~".dimmed(),
                payload.label,
                payload.phase
            );
        }
        SurfaceEvent::HoverChanged(None) => {
            println!("  {} hover -> none", "~".dimmed());
        }
    }
}

/// Row of a dataset comparison: base value, other value, coloured difference
pub(crate) fn print_diff_row(label: &str, phase: PhaseKind, base: Option<f64>, other: Option<f64>) {
    let cell = |v: Option<f64>| v.map(format_count).unwrap_or_else(|| "-".to_string());
    print!(
        "{} {} {:>9} {:>9}",
        style_label(&format!("{:<LABEL_WIDTH$}", label)),
        style_phase(phase),
        cell(base),
        cell(other)
    );
    match (base, other) {
        (Some(a), Some(b)) => print_colored_diff(b - a),
        _ => print!(" {:>9}", "-"),
    }
    println!();
}

fn print_colored_diff(diff: f64) {
    let rounded = diff.round();
    if rounded == 0.0 {
        print!(" {:>9}", "0");
    } else {
        let sign = if rounded > 0.0 { "+" } else { "" };
        let formatted = format!("{:>9}", format!("{}{}", sign, format_count(rounded)));
        if rounded > 0.0 {
            print!(" {}", formatted.green());
        } else {
            print!(" {}", formatted.red());
        }
    }
}

pub(crate) fn print_legend(tab: ChartTab) {
    println!("{}", tab.caption());
    match tab {
        ChartTab::ArmySize => println!("↩: stop passed again on the retreat"),
        ChartTab::Temperature | ChartTab::Combined => {
            println!("°Ré: Réaumur, as recorded on the map (°C = °Ré x 1.25)")
        }
        ChartTab::ModernMinard => {
            println!("HEIGHT: band thickness in pixels, proportional to troops");
            println!("X: horizontal position in pixels");
        }
        ChartTab::Route => {}
    }
}
