//! Flow-band geometry, hover tooltips and chart panels for Minard's map of
//! Napoleon's 1812 campaign.
//!
//! A [`data::Campaign`] holds the advance and retreat as ordered waypoints.
//! [`geometry::build_flow_chart`] turns it into band polygons, a temperature
//! curve and hoverable dots; [`interact::ChartSurface`] tracks the selected
//! tab and hover state on top of that geometry.

pub mod chart;
pub mod data;
pub mod error;
pub mod geometry;
pub mod interact;
pub mod panel;

pub use error::{MinardError, Result};
