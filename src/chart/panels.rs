//! Panel charts (army size, route, temperature, combined)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ColorStop, ItemStyle, Label, LabelPosition, LineStyle,
        SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::{Bar, Line},
};
use tracing::debug;

use crate::data::{Campaign, PhaseKind};
use crate::error::{MinardError, Result};
use crate::panel::{ArmyBar, CombinedPoint, Panel, RoutePoint, TemperaturePoint};

use super::colors::Theme;
use super::flow::render_flow_svg;
use super::{CHART_HEIGHT, CHART_WIDTH, is_png};

/// Build the chart for a panel; `None` for the flow chart, which is drawn
/// as raw SVG
pub fn panel_chart(panel: &Panel, theme: &Theme) -> Option<Chart> {
    let chart = match panel {
        Panel::ArmySize(bars) => army_chart(bars, theme),
        Panel::Route { advance, retreat } => route_chart(advance, retreat, theme),
        Panel::Temperature(points) => temperature_chart(points, theme),
        Panel::Combined(points) => combined_chart(points, theme),
        Panel::ModernMinard(_) => return None,
    };
    Some(chart)
}

/// Render a panel to disk. Panel charts may be SVG or PNG; the flow chart
/// is SVG only.
pub fn render_panel(
    panel: &Panel,
    campaign: &Campaign,
    theme: &Theme,
    output_path: &str,
) -> Result<()> {
    debug!(tab = panel.tab().slug(), output_path, "rendering panel");

    let Some(chart) = panel_chart(panel, theme) else {
        if is_png(output_path) {
            return Err(MinardError::Render(
                "the modern-minard chart can only be written as SVG".to_string(),
            ));
        }
        let Panel::ModernMinard(geometry) = panel else {
            return Err(MinardError::Render("no chart for panel".to_string()));
        };
        let svg = render_flow_svg(geometry, campaign, theme);
        return std::fs::write(output_path, svg).map_err(|e| MinardError::Io {
            path: output_path.to_string(),
            message: e.to_string(),
        });
    };

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    let saved = if is_png(output_path) {
        renderer.save_format(ImageFormat::Png, &chart, output_path)
    } else {
        renderer.save(&chart, output_path)
    };
    saved.map_err(|e| MinardError::Render(e.to_string()))
}

/// Title, background and grid shared by every panel
fn base_chart(title: &str, subtitle: &str, legend: Vec<String>, theme: &Theme) -> Chart {
    Chart::new()
        .background_color(Color::Value(theme.background.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(theme.accent).font_size(36))
                .subtext_style(TextStyle::new().color(theme.muted).font_size(24)),
        )
        .legend(
            Legend::new()
                .data(legend)
                .bottom("3%")
                .item_gap(40)
                .text_style(TextStyle::new().color(theme.text).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("5%")
                .bottom("10%")
                .top("15%")
                .contain_label(true),
        )
}

fn value_axis(name: &str, theme: &Theme) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .name(name)
        .name_text_style(TextStyle::new().color(theme.text).font_size(24))
        .axis_label(AxisLabel::new().color(theme.text).font_size(20))
        .split_line(SplitLine::new().line_style(LineStyle::new().width(0.5).color(theme.grid)))
}

fn category_axis(labels: Vec<String>, theme: &Theme) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .data(labels)
        .axis_label(AxisLabel::new().color(theme.text).font_size(20))
}

fn gradient(top: &str, bottom: &str) -> Color {
    Color::LinearGradient {
        x: 0.0,
        y: 0.0,
        x2: 0.0,
        y2: 1.0,
        color_stops: vec![ColorStop::new(0.0, top), ColorStop::new(1.0, bottom)],
    }
}

/// Advance and retreat as two stacked series so each keeps its color; the
/// other phase's slots are zero
fn army_chart(bars: &[ArmyBar], theme: &Theme) -> Chart {
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let troops_for = |phase: PhaseKind| -> Vec<f64> {
        bars.iter()
            .map(|b| if b.phase == phase { b.troops } else { 0.0 })
            .collect()
    };

    let mut chart = base_chart(
        "Army Size",
        "Troops at each stop, advance then retreat",
        vec!["Advance".to_string(), "Retreat".to_string()],
        theme,
    )
    .x_axis(category_axis(labels, theme))
    .y_axis(value_axis("Troops", theme));

    for (name, phase, top, bottom) in [
        ("Advance", PhaseKind::Advance, theme.advance_top, theme.advance_bottom),
        ("Retreat", PhaseKind::Retreat, theme.retreat_top, theme.retreat_bottom),
    ] {
        chart = chart.series(
            Bar::new()
                .name(name)
                .data(troops_for(phase))
                .stack("troops")
                .item_style(ItemStyle::new().color(gradient(top, bottom)).opacity(0.9)),
        );
    }
    chart
}

fn route_chart(advance: &[RoutePoint], retreat: &[RoutePoint], theme: &Theme) -> Chart {
    let coords = |points: &[RoutePoint]| -> Vec<Vec<f64>> {
        points.iter().map(|p| vec![p.lon, p.lat]).collect()
    };

    base_chart(
        "Route",
        "Longitude (°E) against latitude (°N)",
        vec!["Advance".to_string(), "Retreat".to_string()],
        theme,
    )
    .x_axis(value_axis("°E", theme).min(23).max(38))
    .y_axis(value_axis("°N", theme).min(54).max(56))
    .series(
        Line::new()
            .name("Advance")
            .data(coords(advance))
            .symbol(Symbol::Circle)
            .symbol_size(12)
            .line_style(LineStyle::new().width(6).color(theme.advance_top))
            .item_style(ItemStyle::new().color(theme.advance_bottom)),
    )
    .series(
        Line::new()
            .name("Retreat")
            .data(coords(retreat))
            .symbol(Symbol::Circle)
            .symbol_size(10)
            .line_style(LineStyle::new().width(3).color(theme.retreat_top))
            .item_style(ItemStyle::new().color(theme.retreat_bottom)),
    )
}

fn temperature_chart(points: &[TemperaturePoint], theme: &Theme) -> Chart {
    let dates: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
    let celsius: Vec<f64> = points.iter().map(|p| p.celsius).collect();
    let reaumur: Vec<f64> = points.iter().map(|p| p.reaumur).collect();

    base_chart(
        "Temperature",
        "Readings on the retreat, Réaumur and Celsius",
        vec!["°C".to_string(), "°Ré".to_string()],
        theme,
    )
    .x_axis(category_axis(dates, theme))
    .y_axis(value_axis("°", theme).min(-40).max(0))
    .series(
        Line::new()
            .name("°C")
            .data(celsius)
            .symbol(Symbol::Circle)
            .symbol_size(10)
            .line_style(LineStyle::new().width(3).color(theme.temperature))
            .item_style(ItemStyle::new().color(theme.temperature))
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Bottom)
                    .color(theme.text)
                    .font_size(18)
                    .formatter("{c}°"),
            ),
    )
    .series(
        Line::new()
            .name("°Ré")
            .data(reaumur)
            .symbol(Symbol::Circle)
            .symbol_size(6)
            .line_style(LineStyle::new().width(1).color(theme.muted))
            .item_style(ItemStyle::new().color(theme.muted)),
    )
}

fn combined_chart(points: &[CombinedPoint], theme: &Theme) -> Chart {
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let troops: Vec<f64> = points.iter().map(|p| p.troops).collect();
    // NaN serializes to null, which ECharts draws as a gap
    let celsius: Vec<f64> = points.iter().map(|p| p.celsius.unwrap_or(f64::NAN)).collect();

    base_chart(
        "Combined",
        "Retreat strength against the cold",
        vec!["Troops".to_string(), "°C".to_string()],
        theme,
    )
    .x_axis(category_axis(labels, theme))
    .y_axis(value_axis("Troops", theme))
    .y_axis(value_axis("°C", theme).min(-40).max(0))
    .series(
        Bar::new()
            .name("Troops")
            .data(troops)
            .item_style(
                ItemStyle::new()
                    .color(gradient(theme.retreat_top, theme.retreat_bottom))
                    .opacity(0.9),
            )
            .label(
                Label::new()
                    .show(true)
                    .position(LabelPosition::Top)
                    .color(theme.text)
                    .font_size(18)
                    .formatter("{c}"),
            ),
    )
    .series(
        Line::new()
            .name("°C")
            .data(celsius)
            .y_axis_index(1)
            .symbol(Symbol::Circle)
            .symbol_size(10)
            .line_style(LineStyle::new().width(3).color(theme.temperature))
            .item_style(ItemStyle::new().color(theme.temperature)),
    )
}
