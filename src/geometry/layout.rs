//! Chart bounds and anchor configuration

use crate::data::PhaseKind;
use crate::error::{MinardError, Result};

/// Which edge of each band stays fixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorPolicy {
    /// Both bands taper away from one horizontal axis through the middle of
    /// the band area: advance above, retreat below.
    SharedCenterline,
    /// The advance sits on the bottom of the upper region, the retreat hangs
    /// from the top of the lower region, `gap` pixels further down.
    StackedBaseline { gap: f64 },
}

/// How waypoint x coordinates are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxisMode {
    /// Use each waypoint's normalized position
    Geographic,
    /// Spread waypoints evenly by index within their phase
    Ordinal,
}

/// Pixel bounds and drawing options for the flow-band chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    /// Top of the area shared by both bands
    pub band_top: f64,
    /// Height of the area shared by both bands (including any gap)
    pub band_height: f64,
    /// Fraction of a band's region the largest magnitude fills
    pub band_fill: f64,
    pub temp_top: f64,
    pub temp_height: f64,
    /// Temperature axis range in degrees Celsius
    pub temp_min: f64,
    pub temp_max: f64,
    pub anchor: AnchorPolicy,
    pub x_axis: XAxisMode,
    pub dot_radius: f64,
    pub temp_dot_radius: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::stacked()
    }
}

impl ChartLayout {
    /// Two stacked bands over a geographic x axis
    pub fn stacked() -> Self {
        Self {
            width: 760.0,
            height: 390.0,
            pad_left: 52.0,
            pad_right: 24.0,
            band_top: 16.0,
            band_height: 244.0,
            band_fill: 0.95,
            temp_top: 278.0,
            temp_height: 82.0,
            temp_min: -40.0,
            temp_max: 0.0,
            anchor: AnchorPolicy::StackedBaseline { gap: 8.0 },
            x_axis: XAxisMode::Geographic,
            dot_radius: 5.0,
            temp_dot_radius: 3.5,
        }
    }

    /// Bands mirrored around a shared centre axis, waypoints evenly spaced
    pub fn centerline() -> Self {
        Self {
            width: 800.0,
            height: 360.0,
            pad_left: 60.0,
            pad_right: 60.0,
            band_top: 60.0,
            band_height: 160.0,
            band_fill: 0.92,
            temp_top: 230.0,
            temp_height: 60.0,
            temp_min: -40.0,
            temp_max: 0.0,
            anchor: AnchorPolicy::SharedCenterline,
            x_axis: XAxisMode::Ordinal,
            dot_radius: 5.0,
            temp_dot_radius: 3.5,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorPolicy) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, x_axis: XAxisMode) -> Self {
        self.x_axis = x_axis;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(MinardError::InvalidLayout(msg.to_string()));

        let pixels = [
            self.width,
            self.height,
            self.pad_left,
            self.pad_right,
            self.band_top,
            self.band_height,
            self.temp_top,
            self.temp_height,
            self.dot_radius,
            self.temp_dot_radius,
        ];
        if !pixels.iter().all(|v| v.is_finite()) {
            return invalid("pixel dimensions must be finite");
        }
        if !(self.chart_width() > 0.0) {
            return invalid("padding leaves no room for the chart");
        }
        if !(self.band_height > 0.0) {
            return invalid("band height must be positive");
        }
        if !(self.band_fill > 0.0 && self.band_fill <= 1.0) {
            return invalid("band fill must be in (0, 1]");
        }
        if let AnchorPolicy::StackedBaseline { gap } = self.anchor
            && !(gap >= 0.0 && gap < self.band_height)
        {
            return invalid("stacked gap must be non-negative and smaller than the band area");
        }
        if !(self.temp_height > 0.0) {
            return invalid("temperature area height must be positive");
        }
        if !(self.dot_radius > 0.0 && self.temp_dot_radius > 0.0) {
            return invalid("dot radii must be positive");
        }
        Ok(())
    }

    pub fn chart_left(&self) -> f64 {
        self.pad_left
    }

    pub fn chart_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    pub fn chart_right(&self) -> f64 {
        self.width - self.pad_right
    }

    /// Height available to one band before `band_fill` is applied
    fn region_height(&self) -> f64 {
        match self.anchor {
            AnchorPolicy::SharedCenterline => self.band_height / 2.0,
            AnchorPolicy::StackedBaseline { gap } => (self.band_height - gap) / 2.0,
        }
    }

    /// Band height drawn for the maximum magnitude
    pub fn max_band_height(&self) -> f64 {
        self.region_height() * self.band_fill
    }

    /// Y of the fixed edge of the given phase's band
    pub fn baseline(&self, phase: PhaseKind) -> f64 {
        let region = self.region_height();
        match (self.anchor, phase) {
            (AnchorPolicy::SharedCenterline, _) => self.band_top + region,
            (AnchorPolicy::StackedBaseline { .. }, PhaseKind::Advance) => self.band_top + region,
            (AnchorPolicy::StackedBaseline { gap }, PhaseKind::Retreat) => {
                self.band_top + region + gap
            }
        }
    }
}
