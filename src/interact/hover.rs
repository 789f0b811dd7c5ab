//! Pointer → waypoint resolution and tooltip payloads

use crate::data::{Campaign, PhaseKind, Temperature, WaypointRef};
use crate::geometry::{FlowChartGeometry, Point};

/// How a pointer position picks a waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverStrategy {
    /// Pointer must fall inside a dot's circular target
    #[default]
    HitTest,
    /// Snap to the dot with the closest x, anywhere on the chart
    NearestX,
}

/// A circular hover target registered for one plotted dot
#[derive(Debug, Clone, PartialEq)]
pub struct HitTarget {
    /// Registration order, starting at 0
    pub id: usize,
    pub waypoint: WaypointRef,
    pub center: Point,
    pub radius: f64,
}

/// Hover targets in registration (render) order.
///
/// When two targets are equally close to the pointer the one registered last
/// wins, matching what is drawn on top.
#[derive(Debug, Clone, Default)]
pub struct HoverResolver {
    targets: Vec<HitTarget>,
    strategy: HoverStrategy,
}

impl HoverResolver {
    pub fn new(strategy: HoverStrategy) -> Self {
        Self {
            targets: Vec::new(),
            strategy,
        }
    }

    /// Register every dot of a flow chart, in render order
    pub fn from_geometry(geometry: &FlowChartGeometry, strategy: HoverStrategy) -> Self {
        let mut resolver = Self::new(strategy);
        for dot in &geometry.dots {
            resolver.register(dot.waypoint, dot.center, dot.radius);
        }
        resolver
    }

    pub fn register(&mut self, waypoint: WaypointRef, center: Point, radius: f64) -> usize {
        let id = self.targets.len();
        self.targets.push(HitTarget {
            id,
            waypoint,
            center,
            radius,
        });
        id
    }

    pub fn strategy(&self) -> HoverStrategy {
        self.strategy
    }

    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }

    pub fn target(&self, id: usize) -> Option<&HitTarget> {
        self.targets.get(id)
    }

    /// Resolve a pointer position; `None` when nothing is under it
    pub fn resolve(&self, pointer: Point) -> Option<&HitTarget> {
        let mut best: Option<(&HitTarget, f64)> = None;
        for target in &self.targets {
            let distance = match self.strategy {
                HoverStrategy::HitTest => {
                    let d = target.center.distance(pointer);
                    if d > target.radius {
                        continue;
                    }
                    d
                }
                HoverStrategy::NearestX => (target.center.x - pointer.x).abs(),
            };
            // `<=` lets later registrations win ties
            if best.is_none_or(|(_, closest)| distance <= closest) {
                best = Some((target, distance));
            }
        }
        best.map(|(target, _)| target)
    }
}

/// Data shown in the floating annotation for a hovered waypoint
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPayload {
    pub label: String,
    pub phase: PhaseKind,
    pub magnitude: f64,
    pub timestamp: String,
    pub temperature: Option<Temperature>,
}

impl TooltipPayload {
    pub fn from_waypoint(campaign: &Campaign, waypoint: WaypointRef) -> Option<Self> {
        let wp = campaign.waypoint(waypoint)?;
        Some(Self {
            label: wp.label.clone(),
            phase: waypoint.phase,
            magnitude: wp.magnitude,
            timestamp: wp.timestamp.clone(),
            temperature: wp.temperature,
        })
    }

    pub fn celsius(&self) -> Option<f64> {
        self.temperature.map(Temperature::celsius)
    }

    /// Heading line, e.g. "Niemen - Retreat"
    pub fn title(&self) -> String {
        let phase = match self.phase {
            PhaseKind::Advance => "Advance",
            PhaseKind::Retreat => "Retreat",
        };
        format!("{} - {}", self.label, phase)
    }

    /// Body lines below the heading
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Troops: {}", format_count(self.magnitude)),
            format!("Date: {}", self.timestamp),
        ];
        if let Some(t) = self.temperature {
            lines.push(format!("Temp: {}", format_temperature(t)));
        }
        lines
    }
}

/// Format a count with thousands separators (e.g., 422000 -> "422,000")
pub fn format_count(value: f64) -> String {
    let digits = format!("{}", value.round().abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value.round() < 0.0 {
        out.insert(0, '-');
    }
    out
}

/// Format a reading in both scales (e.g., "-26°Ré (-32.5°C)")
pub fn format_temperature(t: Temperature) -> String {
    format!("{}°Ré ({}°C)", t.reaumur(), t.celsius())
}
