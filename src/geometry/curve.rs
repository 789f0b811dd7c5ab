//! Temperature curve beneath the retreat band

use tracing::debug;

use crate::data::Phase;

use super::layout::XAxisMode;
use super::scale::ScaleContext;
use super::{Point, path_data};

/// Polyline through the waypoints that carry a temperature
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGeometry {
    pub points: Vec<Point>,
    /// Storage index in the phase of each point
    pub waypoints: Vec<usize>,
    /// Y of the reference value the area closes against
    pub reference_y: f64,
    /// Polyline closed down to `reference_y`; absent below two points
    pub area: Option<Vec<Point>>,
}

impl CurveGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn path(&self) -> String {
        path_data(&self.points, false)
    }

    pub fn area_path(&self) -> Option<String> {
        self.area.as_deref().map(|area| path_data(area, true))
    }
}

/// Build the temperature curve for a phase.
///
/// Waypoints without a reading are skipped, so the curve can have fewer
/// points than the phase. X coordinates match the band built from the same
/// phase and axis mode.
pub fn build_temperature_curve(
    phase: &Phase,
    scale: &ScaleContext,
    x_axis: XAxisMode,
    reference_celsius: f64,
) -> CurveGeometry {
    let xs = scale.phase_xs(phase, x_axis);

    let (waypoints, points): (Vec<usize>, Vec<Point>) = phase
        .waypoints()
        .iter()
        .enumerate()
        .filter_map(|(i, wp)| {
            wp.temperature
                .map(|t| (i, Point::new(xs[i], scale.temp_y(t.celsius()))))
        })
        .unzip();

    let reference_y = scale.temp_y(reference_celsius);
    let area = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => {
            let mut area = points.clone();
            area.push(Point::new(last.x, reference_y));
            area.push(Point::new(first.x, reference_y));
            Some(area)
        }
        _ => None,
    };

    debug!(
        phase = %phase.kind(),
        points = points.len(),
        "built temperature curve"
    );

    CurveGeometry {
        points,
        waypoints,
        reference_y,
        area,
    }
}
