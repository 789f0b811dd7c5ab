//! Flow-band polygon construction

use tracing::debug;

use crate::data::{Phase, PhaseKind};
use crate::error::{MinardError, Result};

use super::Point;
use super::layout::ChartLayout;
use super::scale::ScaleContext;

/// Which side of its baseline a band grows towards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSide {
    Upper,
    Lower,
}

impl BandSide {
    pub fn for_phase(kind: PhaseKind) -> Self {
        match kind {
            PhaseKind::Advance => BandSide::Upper,
            PhaseKind::Retreat => BandSide::Lower,
        }
    }

    /// Direction in SVG y (which grows downwards)
    fn sign(self) -> f64 {
        match self {
            BandSide::Upper => -1.0,
            BandSide::Lower => 1.0,
        }
    }
}

/// Closed contour of one band plus the points derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct BandGeometry {
    pub phase: PhaseKind,
    pub side: BandSide,
    pub baseline_y: f64,
    /// Varying edge, one point per waypoint in storage order
    pub taper: Vec<Point>,
    /// Taper edge followed by the baseline edge reversed: `2 * N` points
    pub polygon: Vec<Point>,
    /// Mid-height of the band at each waypoint (hover dot centres)
    pub anchors: Vec<Point>,
    pub heights: Vec<f64>,
}

/// Build the band polygon for one phase.
///
/// Phases with fewer than two waypoints are rejected rather than drawn as a
/// degenerate point.
pub fn build_band(
    phase: &Phase,
    scale: &ScaleContext,
    layout: &ChartLayout,
) -> Result<BandGeometry> {
    if phase.len() < 2 {
        return Err(MinardError::TooFewWaypoints {
            phase: phase.kind(),
            count: phase.len(),
        });
    }

    let side = BandSide::for_phase(phase.kind());
    let baseline_y = layout.baseline(phase.kind());
    let xs = scale.phase_xs(phase, layout.x_axis);
    let heights: Vec<f64> = phase
        .waypoints()
        .iter()
        .map(|wp| scale.band_height(wp.magnitude))
        .collect();

    let taper: Vec<Point> = xs
        .iter()
        .zip(&heights)
        .map(|(&x, &h)| Point::new(x, baseline_y + side.sign() * h))
        .collect();

    let anchors: Vec<Point> = xs
        .iter()
        .zip(&heights)
        .map(|(&x, &h)| Point::new(x, baseline_y + side.sign() * h / 2.0))
        .collect();

    let mut polygon = taper.clone();
    polygon.extend(xs.iter().rev().map(|&x| Point::new(x, baseline_y)));

    debug!(
        phase = %phase.kind(),
        points = polygon.len(),
        baseline_y,
        "built band"
    );

    Ok(BandGeometry {
        phase: phase.kind(),
        side,
        baseline_y,
        taper,
        polygon,
        anchors,
        heights,
    })
}
