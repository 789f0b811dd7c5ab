//! The five chart tabs and the data each one plots

use std::fmt;

use crate::data::{Campaign, Phase, PhaseKind};
use crate::error::Result;
use crate::geometry::{ChartLayout, FlowChartGeometry, build_flow_chart};

/// Suffix marking retreat entries in the army-size panel
pub const RETREAT_MARK: &str = "↩";

/// Selectable chart tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ChartTab {
    #[default]
    ArmySize,
    Route,
    Temperature,
    Combined,
    ModernMinard,
}

impl ChartTab {
    pub const ALL: [ChartTab; 5] = [
        ChartTab::ArmySize,
        ChartTab::Route,
        ChartTab::Temperature,
        ChartTab::Combined,
        ChartTab::ModernMinard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartTab::ArmySize => "Army Size",
            ChartTab::Route => "Route",
            ChartTab::Temperature => "Temperature",
            ChartTab::Combined => "Combined",
            ChartTab::ModernMinard => "Modern Minard",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ChartTab::ArmySize => "army-size",
            ChartTab::Route => "route",
            ChartTab::Temperature => "temperature",
            ChartTab::Combined => "combined",
            ChartTab::ModernMinard => "modern-minard",
        }
    }

    /// One-line reading of what the tab shows
    pub fn caption(self) -> &'static str {
        match self {
            ChartTab::ArmySize => "Troop strength at each stop, advance then retreat",
            ChartTab::Route => "Longitude and latitude of every stop",
            ChartTab::Temperature => "Temperatures recorded during the retreat",
            ChartTab::Combined => "Retreat strength against the cold",
            ChartTab::ModernMinard => "Both legs as flow bands over the temperature curve",
        }
    }
}

impl fmt::Display for ChartTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One bar of the army-size panel
#[derive(Debug, Clone, PartialEq)]
pub struct ArmyBar {
    pub label: String,
    pub phase: PhaseKind,
    pub troops: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub label: String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperaturePoint {
    pub date: String,
    pub reaumur: f64,
    pub celsius: f64,
}

/// A retreat stop with its strength and, when recorded, its temperature
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedPoint {
    pub label: String,
    pub troops: f64,
    pub celsius: Option<f64>,
}

/// Data behind one tab
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    ArmySize(Vec<ArmyBar>),
    Route {
        advance: Vec<RoutePoint>,
        retreat: Vec<RoutePoint>,
    },
    Temperature(Vec<TemperaturePoint>),
    Combined(Vec<CombinedPoint>),
    ModernMinard(Box<FlowChartGeometry>),
}

impl Panel {
    pub fn tab(&self) -> ChartTab {
        match self {
            Panel::ArmySize(_) => ChartTab::ArmySize,
            Panel::Route { .. } => ChartTab::Route,
            Panel::Temperature(_) => ChartTab::Temperature,
            Panel::Combined(_) => ChartTab::Combined,
            Panel::ModernMinard(_) => ChartTab::ModernMinard,
        }
    }
}

/// Build the data for a tab. Pure: the same inputs give the same panel.
pub fn build_panel(tab: ChartTab, campaign: &Campaign, layout: &ChartLayout) -> Result<Panel> {
    Ok(match tab {
        ChartTab::ArmySize => Panel::ArmySize(army_bars(campaign)),
        ChartTab::Route => Panel::Route {
            advance: route_points(campaign.advance()),
            retreat: route_points(campaign.retreat()),
        },
        ChartTab::Temperature => Panel::Temperature(temperature_points(campaign)),
        ChartTab::Combined => Panel::Combined(combined_points(campaign)),
        ChartTab::ModernMinard => Panel::ModernMinard(Box::new(build_flow_chart(campaign, layout)?)),
    })
}

/// Advance then retreat in travel order. The retreat's first stop is dropped
/// when it repeats the advance's last one.
fn army_bars(campaign: &Campaign) -> Vec<ArmyBar> {
    let advance = campaign.advance();
    let retreat = campaign.retreat();

    let mut bars: Vec<ArmyBar> = advance
        .travel_order()
        .into_iter()
        .map(|i| {
            let wp = &advance.waypoints()[i];
            ArmyBar {
                label: wp.label.clone(),
                phase: PhaseKind::Advance,
                troops: wp.magnitude,
            }
        })
        .collect();

    let skip_turn = usize::from(retreat.start().label == advance.end().label);
    bars.extend(retreat.travel_order().into_iter().skip(skip_turn).map(|i| {
        let wp = &retreat.waypoints()[i];
        ArmyBar {
            label: format!("{}{}", wp.label, RETREAT_MARK),
            phase: PhaseKind::Retreat,
            troops: wp.magnitude,
        }
    }));
    bars
}

fn route_points(phase: &Phase) -> Vec<RoutePoint> {
    phase
        .travel_order()
        .into_iter()
        .filter_map(|i| {
            let wp = &phase.waypoints()[i];
            wp.location.map(|loc| RoutePoint {
                label: wp.label.clone(),
                lon: loc.lon,
                lat: loc.lat,
            })
        })
        .collect()
}

/// The dated log when present, otherwise the retreat's own readings
fn temperature_points(campaign: &Campaign) -> Vec<TemperaturePoint> {
    if !campaign.temperature_log().is_empty() {
        return campaign
            .temperature_log()
            .iter()
            .map(|r| TemperaturePoint {
                date: r.date.clone(),
                reaumur: r.temperature.reaumur(),
                celsius: r.temperature.celsius(),
            })
            .collect();
    }

    let retreat = campaign.retreat();
    retreat
        .travel_order()
        .into_iter()
        .filter_map(|i| {
            let wp = &retreat.waypoints()[i];
            wp.temperature.map(|t| TemperaturePoint {
                date: wp.timestamp.clone(),
                reaumur: t.reaumur(),
                celsius: t.celsius(),
            })
        })
        .collect()
}

fn combined_points(campaign: &Campaign) -> Vec<CombinedPoint> {
    let retreat = campaign.retreat();
    retreat
        .travel_order()
        .into_iter()
        .map(|i| {
            let wp = &retreat.waypoints()[i];
            CombinedPoint {
                label: wp.label.clone(),
                troops: wp.magnitude,
                celsius: wp.temperature.map(|t| t.celsius()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Waypoint, minard_1812};

    fn campaign() -> Campaign {
        minard_1812().unwrap()
    }

    #[test]
    fn test_army_bars_in_travel_order() {
        let panel = build_panel(ChartTab::ArmySize, &campaign(), &ChartLayout::default()).unwrap();
        let Panel::ArmySize(bars) = panel else {
            panic!("expected army panel");
        };

        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Niemen", "Vilnius", "Vitebsk", "Smolensk", "Moscow",
                "Smolensk↩", "Berezina↩", "Vilnius↩", "Niemen↩",
            ]
        );
        assert_eq!(bars[0].troops, 422_000.0);
        assert_eq!(bars[8].troops, 10_000.0);
        assert!(bars[5..].iter().all(|b| b.phase == PhaseKind::Retreat));
    }

    #[test]
    fn test_army_bars_keep_distinct_turning_point() {
        let advance = vec![
            Waypoint::new("A", 0.0, 100.0, "t0"),
            Waypoint::new("B", 1.0, 80.0, "t1"),
        ];
        let retreat = vec![
            Waypoint::new("A", 0.0, 10.0, "t3"),
            Waypoint::new("C", 1.0, 70.0, "t2"),
        ];
        let campaign = Campaign::new(advance, retreat).unwrap();
        let Panel::ArmySize(bars) =
            build_panel(ChartTab::ArmySize, &campaign, &ChartLayout::default()).unwrap()
        else {
            panic!("expected army panel");
        };
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[2].label, "C↩");
    }

    #[test]
    fn test_route_follows_travel_order() {
        let Panel::Route { advance, retreat } =
            build_panel(ChartTab::Route, &campaign(), &ChartLayout::default()).unwrap()
        else {
            panic!("expected route panel");
        };
        assert_eq!(advance.first().unwrap().label, "Niemen");
        assert_eq!(advance.last().unwrap().label, "Moscow");
        assert_eq!(retreat.first().unwrap().label, "Moscow");
        assert_eq!(retreat.last().unwrap().label, "Niemen");
        assert!(advance.iter().all(|p| (23.0..38.0).contains(&p.lon)));
    }

    #[test]
    fn test_temperature_panel_uses_log() {
        let Panel::Temperature(points) =
            build_panel(ChartTab::Temperature, &campaign(), &ChartLayout::default()).unwrap()
        else {
            panic!("expected temperature panel");
        };
        assert_eq!(points.len(), 8);
        assert_eq!(points[0].reaumur, 0.0);
        assert_eq!(points[6].reaumur, -30.0);
        assert_eq!(points[6].celsius, -37.5);
    }

    #[test]
    fn test_temperature_panel_falls_back_to_retreat_readings() {
        let campaign = campaign().with_temperature_log(Vec::new()).unwrap();
        let Panel::Temperature(points) =
            build_panel(ChartTab::Temperature, &campaign, &ChartLayout::default()).unwrap()
        else {
            panic!("expected temperature panel");
        };
        let celsius: Vec<f64> = points.iter().map(|p| p.celsius).collect();
        assert_eq!(celsius, [0.0, -11.25, -26.25, -32.5, -37.5]);
        assert_eq!(points[0].date, "Oct 1812");
    }

    #[test]
    fn test_combined_pairs_troops_with_cold() {
        let Panel::Combined(points) =
            build_panel(ChartTab::Combined, &campaign(), &ChartLayout::default()).unwrap()
        else {
            panic!("expected combined panel");
        };
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].label, "Moscow");
        assert_eq!(points[0].troops, 100_000.0);
        assert_eq!(points[4].celsius, Some(-37.5));
    }

    #[test]
    fn test_build_panel_is_idempotent() {
        let campaign = campaign();
        let layout = ChartLayout::default();
        for tab in ChartTab::ALL {
            let first = build_panel(tab, &campaign, &layout).unwrap();
            let second = build_panel(tab, &campaign, &layout).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.tab(), tab);
        }
    }
}
