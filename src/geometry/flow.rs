//! The combined "modern Minard" chart: two bands and the temperature curve

use tracing::debug;

use crate::data::{Campaign, PhaseKind, WaypointRef};
use crate::error::Result;

use super::Point;
use super::band::{BandGeometry, build_band};
use super::curve::{CurveGeometry, build_temperature_curve};
use super::layout::ChartLayout;
use super::scale::ScaleContext;

/// What a dot is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotLayer {
    Band,
    Temperature,
}

/// A plotted, hoverable waypoint marker
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub waypoint: WaypointRef,
    pub layer: DotLayer,
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowChartGeometry {
    pub layout: ChartLayout,
    pub scale: ScaleContext,
    pub advance: BandGeometry,
    pub retreat: BandGeometry,
    pub temperature: CurveGeometry,
    /// Dotted ties from each advance taper point to the retreat taper point
    /// at the same place
    pub connectors: Vec<(Point, Point)>,
    /// Dots in render order: advance, retreat, temperature
    pub dots: Vec<Dot>,
}

impl FlowChartGeometry {
    pub fn band(&self, phase: PhaseKind) -> &BandGeometry {
        match phase {
            PhaseKind::Advance => &self.advance,
            PhaseKind::Retreat => &self.retreat,
        }
    }
}

/// Build every shape of the flow-band chart from a campaign
pub fn build_flow_chart(campaign: &Campaign, layout: &ChartLayout) -> Result<FlowChartGeometry> {
    let scale = ScaleContext::new(campaign.max_magnitude(), layout)?;
    let advance = build_band(campaign.advance(), &scale, layout)?;
    let retreat = build_band(campaign.retreat(), &scale, layout)?;
    let temperature = build_temperature_curve(campaign.retreat(), &scale, layout.x_axis, 0.0);

    let connectors = campaign
        .advance()
        .waypoints()
        .iter()
        .enumerate()
        .filter_map(|(i, wp)| {
            campaign
                .retreat()
                .index_of(&wp.label)
                .map(|j| (advance.taper[i], retreat.taper[j]))
        })
        .filter(|(top, bottom)| top.x == bottom.x)
        .collect();

    let mut dots = Vec::new();
    for band in [&advance, &retreat] {
        dots.extend(band.anchors.iter().enumerate().map(|(index, &center)| Dot {
            waypoint: WaypointRef {
                phase: band.phase,
                index,
            },
            layer: DotLayer::Band,
            center,
            radius: layout.dot_radius,
        }));
    }
    dots.extend(
        temperature
            .waypoints
            .iter()
            .zip(&temperature.points)
            .map(|(&index, &center)| Dot {
                waypoint: WaypointRef {
                    phase: PhaseKind::Retreat,
                    index,
                },
                layer: DotLayer::Temperature,
                center,
                radius: layout.temp_dot_radius,
            }),
    );

    debug!(dots = dots.len(), anchor = ?layout.anchor, "built flow chart");

    Ok(FlowChartGeometry {
        layout: layout.clone(),
        scale,
        advance,
        retreat,
        temperature,
        connectors,
        dots,
    })
}
