//! Flow-band chart geometry

mod band;
mod curve;
mod flow;
mod layout;
mod scale;

pub use band::{BandGeometry, BandSide, build_band};
pub use curve::{CurveGeometry, build_temperature_curve};
pub use flow::{Dot, DotLayer, FlowChartGeometry, build_flow_chart};
pub use layout::{AnchorPolicy, ChartLayout, XAxisMode};
pub use scale::{ScaleContext, magnitude_to_band_height, position_to_x, temp_to_y};

/// A point in SVG pixel space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Format points as an SVG `points` attribute ("x,y x,y ...")
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format points as SVG path data ("Mx,y Lx,y ..."), optionally closed
pub fn path_data(points: &[Point], close: bool) -> String {
    let mut d = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.2},{:.2}", cmd, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");
    if close && !points.is_empty() {
        d.push_str(" Z");
    }
    d
}
