//! Linear mappings from data values to pixel coordinates

use crate::data::Phase;
use crate::error::{MinardError, Result};

use super::layout::{ChartLayout, XAxisMode};

fn check_max_magnitude(max_magnitude: f64) -> Result<()> {
    if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
        return Err(MinardError::InvalidMaxMagnitude(max_magnitude));
    }
    Ok(())
}

fn check_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(MinardError::InvalidRange { min, max });
    }
    Ok(())
}

/// Band height proportional to magnitude: `(magnitude / max_magnitude) * max_band_height`.
///
/// Magnitudes above `max_magnitude` are not clamped.
pub fn magnitude_to_band_height(
    magnitude: f64,
    max_magnitude: f64,
    max_band_height: f64,
) -> Result<f64> {
    check_max_magnitude(max_magnitude)?;
    Ok((magnitude / max_magnitude) * max_band_height)
}

/// Map a normalized position (0..1) onto the chart's horizontal extent
pub fn position_to_x(normalized_position: f64, chart_left: f64, chart_width: f64) -> f64 {
    chart_left + normalized_position * chart_width
}

/// Map a temperature onto the temperature area; warmer values sit higher
pub fn temp_to_y(
    temp: f64,
    min_temp: f64,
    max_temp: f64,
    area_top: f64,
    area_height: f64,
) -> Result<f64> {
    check_range(min_temp, max_temp)?;
    Ok(area_top + (max_temp - temp) / (max_temp - min_temp) * area_height)
}

/// Validated scale parameters for one chart build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    max_magnitude: f64,
    max_band_height: f64,
    chart_left: f64,
    chart_width: f64,
    temp_min: f64,
    temp_max: f64,
    temp_top: f64,
    temp_height: f64,
}

impl ScaleContext {
    pub fn new(max_magnitude: f64, layout: &ChartLayout) -> Result<Self> {
        check_max_magnitude(max_magnitude)?;
        check_range(layout.temp_min, layout.temp_max)?;
        layout.validate()?;

        Ok(Self {
            max_magnitude,
            max_band_height: layout.max_band_height(),
            chart_left: layout.chart_left(),
            chart_width: layout.chart_width(),
            temp_min: layout.temp_min,
            temp_max: layout.temp_max,
            temp_top: layout.temp_top,
            temp_height: layout.temp_height,
        })
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn max_band_height(&self) -> f64 {
        self.max_band_height
    }

    pub fn band_height(&self, magnitude: f64) -> f64 {
        (magnitude / self.max_magnitude) * self.max_band_height
    }

    pub fn x(&self, normalized_position: f64) -> f64 {
        position_to_x(normalized_position, self.chart_left, self.chart_width)
    }

    /// Y for a temperature in degrees Celsius
    pub fn temp_y(&self, celsius: f64) -> f64 {
        self.temp_top
            + (self.temp_max - celsius) / (self.temp_max - self.temp_min) * self.temp_height
    }

    /// X coordinate of every waypoint of a phase, in storage order
    pub fn phase_xs(&self, phase: &Phase, mode: XAxisMode) -> Vec<f64> {
        let n = phase.len();
        phase
            .waypoints()
            .iter()
            .enumerate()
            .map(|(i, wp)| match mode {
                XAxisMode::Geographic => self.x(wp.position),
                XAxisMode::Ordinal if n > 1 => self.x(i as f64 / (n - 1) as f64),
                XAxisMode::Ordinal => self.x(0.0),
            })
            .collect()
    }
}
