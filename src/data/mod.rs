//! Campaign datasets: waypoints, phases and temperature readings

mod campaign;
mod loader;

pub use campaign::minard_1812;
pub use loader::{load_campaign, parse_campaign};

use std::fmt;

use tracing::warn;

use crate::error::{MinardError, Result};

/// Degrees Celsius per degree Réaumur
pub const REAUMUR_TO_CELSIUS: f64 = 1.25;

/// Temperature as recorded on the map (Réaumur), convertible to Celsius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    reaumur: f64,
}

impl Temperature {
    pub const fn from_reaumur(reaumur: f64) -> Self {
        Self { reaumur }
    }

    pub fn reaumur(self) -> f64 {
        self.reaumur
    }

    pub fn celsius(self) -> f64 {
        self.reaumur * REAUMUR_TO_CELSIUS
    }
}

/// Longitude / latitude in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// One measurement along a phase
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub label: String,
    /// Normalized west→east position (0..1)
    pub position: f64,
    /// Troop strength
    pub magnitude: f64,
    /// Display string, never parsed
    pub timestamp: String,
    pub temperature: Option<Temperature>,
    pub location: Option<GeoPoint>,
}

impl Waypoint {
    pub fn new(
        label: impl Into<String>,
        position: f64,
        magnitude: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            position,
            magnitude,
            timestamp: timestamp.into(),
            temperature: None,
            location: None,
        }
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn with_location(mut self, lon: f64, lat: f64) -> Self {
        self.location = Some(GeoPoint { lon, lat });
        self
    }
}

/// Direction of a journey leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Advance,
    Retreat,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Advance => "advance",
            PhaseKind::Retreat => "retreat",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered waypoints sharing a direction.
///
/// Waypoints are always stored west→east (non-decreasing position). The
/// advance travels in storage order; the retreat travels in reverse, so its
/// first stop is the last stored waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    kind: PhaseKind,
    waypoints: Vec<Waypoint>,
}

impl Phase {
    pub fn new(kind: PhaseKind, waypoints: Vec<Waypoint>) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(MinardError::EmptyPhase { phase: kind });
        }

        let mut previous = f64::NEG_INFINITY;
        for wp in &waypoints {
            if !wp.magnitude.is_finite() || wp.magnitude < 0.0 {
                return Err(MinardError::InvalidMagnitude {
                    label: wp.label.clone(),
                    magnitude: wp.magnitude,
                });
            }
            if !wp.position.is_finite() {
                return Err(MinardError::InvalidPosition {
                    label: wp.label.clone(),
                    position: wp.position,
                });
            }
            if wp.position < previous {
                return Err(MinardError::UnorderedPosition {
                    label: wp.label.clone(),
                    position: wp.position,
                    previous,
                });
            }
            if let Some(t) = wp.temperature {
                check_temperature(&wp.label, t)?;
            }
            previous = wp.position;
        }

        Ok(Self { kind, waypoints })
    }

    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Storage indices in the order the army passed through them
    pub fn travel_order(&self) -> Vec<usize> {
        match self.kind {
            PhaseKind::Advance => (0..self.waypoints.len()).collect(),
            PhaseKind::Retreat => (0..self.waypoints.len()).rev().collect(),
        }
    }

    /// First waypoint in travel order
    pub fn start(&self) -> &Waypoint {
        let first = self.travel_order()[0];
        &self.waypoints[first]
    }

    /// Last waypoint in travel order
    pub fn end(&self) -> &Waypoint {
        let order = self.travel_order();
        &self.waypoints[order[order.len() - 1]]
    }

    pub fn max_magnitude(&self) -> f64 {
        self.waypoints
            .iter()
            .map(|wp| wp.magnitude)
            .fold(0.0, f64::max)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.waypoints.iter().position(|wp| wp.label == label)
    }

    /// Attach a temperature reading to the waypoint with the given label
    pub fn attach_temperature(&mut self, label: &str, temperature: Temperature) -> Result<()> {
        check_temperature(label, temperature)?;
        let index = self
            .index_of(label)
            .ok_or_else(|| MinardError::UnknownWaypoint {
                phase: self.kind,
                label: label.to_string(),
            })?;
        self.waypoints[index].temperature = Some(temperature);
        Ok(())
    }
}

fn check_temperature(label: &str, temperature: Temperature) -> Result<()> {
    if temperature.reaumur().is_finite() {
        Ok(())
    } else {
        Err(MinardError::InvalidTemperature {
            label: label.to_string(),
            reaumur: temperature.reaumur(),
        })
    }
}

/// Reference to one waypoint of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaypointRef {
    pub phase: PhaseKind,
    /// Storage index within the phase
    pub index: usize,
}

/// A dated reading from the temperature log beneath the map
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub date: String,
    pub temperature: Temperature,
}

impl TemperatureReading {
    pub fn new(date: impl Into<String>, reaumur: f64) -> Self {
        Self {
            date: date.into(),
            temperature: Temperature::from_reaumur(reaumur),
        }
    }
}

/// Both phases plus the shared magnitude normalizer
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    advance: Phase,
    retreat: Phase,
    max_magnitude: f64,
    temperature_log: Vec<TemperatureReading>,
}

impl Campaign {
    pub fn new(advance: Vec<Waypoint>, retreat: Vec<Waypoint>) -> Result<Self> {
        let advance = Phase::new(PhaseKind::Advance, advance)?;
        let retreat = Phase::new(PhaseKind::Retreat, retreat)?;

        let turning_advance = advance.end();
        let turning_retreat = retreat.start();
        if turning_advance.position != turning_retreat.position {
            warn!(
                advance = %turning_advance.label,
                retreat = %turning_retreat.label,
                "advance end and retreat start are at different positions"
            );
        }

        let max_magnitude = advance.max_magnitude().max(retreat.max_magnitude());
        if max_magnitude <= 0.0 {
            return Err(MinardError::InvalidMaxMagnitude(max_magnitude));
        }

        Ok(Self {
            advance,
            retreat,
            max_magnitude,
            temperature_log: Vec::new(),
        })
    }

    /// Override the magnitude normalizer.
    ///
    /// Values smaller than the largest observed magnitude are accepted; bands
    /// then overflow their drawing area.
    pub fn with_max_magnitude(mut self, max_magnitude: f64) -> Result<Self> {
        if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
            return Err(MinardError::InvalidMaxMagnitude(max_magnitude));
        }
        self.max_magnitude = max_magnitude;
        Ok(self)
    }

    /// Replace the dated temperature log; every reading must be finite
    pub fn with_temperature_log(mut self, log: Vec<TemperatureReading>) -> Result<Self> {
        for reading in &log {
            check_temperature(&reading.date, reading.temperature)?;
        }
        self.temperature_log = log;
        Ok(self)
    }

    /// Attach a temperature reading to a retreat waypoint
    pub fn attach_temperature(&mut self, label: &str, temperature: Temperature) -> Result<()> {
        self.retreat.attach_temperature(label, temperature)
    }

    pub fn advance(&self) -> &Phase {
        &self.advance
    }

    pub fn retreat(&self) -> &Phase {
        &self.retreat
    }

    pub fn phase(&self, kind: PhaseKind) -> &Phase {
        match kind {
            PhaseKind::Advance => &self.advance,
            PhaseKind::Retreat => &self.retreat,
        }
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn waypoint(&self, waypoint: WaypointRef) -> Option<&Waypoint> {
        self.phase(waypoint.phase).get(waypoint.index)
    }

    pub fn temperature_log(&self) -> &[TemperatureReading] {
        &self.temperature_log
    }
}
