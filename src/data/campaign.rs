//! The canonical 1812 dataset

use crate::error::Result;

use super::{Campaign, Temperature, TemperatureReading, Waypoint};

/// Napoleon's Russian campaign as drawn by Minard.
///
/// Positions are longitudes normalized over Kaunas (23.9°E) to Moscow
/// (37.6°E). Retreat figures follow the Studianka crossing of the Berezina
/// with 24,000 men reaching Vilnius.
pub fn minard_1812() -> Result<Campaign> {
    let advance = vec![
        Waypoint::new("Niemen", 0.0, 422_000.0, "Jun 1812").with_location(23.9, 54.9),
        Waypoint::new("Vilnius", 0.102, 400_000.0, "Jun 1812").with_location(25.3, 54.7),
        Waypoint::new("Vitebsk", 0.314, 175_000.0, "Jul 1812").with_location(28.2, 55.2),
        Waypoint::new("Smolensk", 0.591, 145_000.0, "Aug 1812").with_location(32.0, 54.8),
        Waypoint::new("Moscow", 1.0, 100_000.0, "Sep 1812").with_location(37.6, 55.8),
    ];

    // West→east; the army walked this list backwards
    let retreat = vec![
        Waypoint::new("Niemen", 0.0, 10_000.0, "Dec 1812")
            .with_temperature(Temperature::from_reaumur(-30.0))
            .with_location(23.9, 54.6),
        Waypoint::new("Vilnius", 0.102, 24_000.0, "Dec 1812")
            .with_temperature(Temperature::from_reaumur(-26.0))
            .with_location(25.3, 54.4),
        Waypoint::new("Berezina", 0.328, 37_000.0, "Nov 1812")
            .with_temperature(Temperature::from_reaumur(-21.0))
            .with_location(28.4, 54.3),
        Waypoint::new("Smolensk", 0.591, 55_000.0, "Nov 1812")
            .with_temperature(Temperature::from_reaumur(-9.0))
            .with_location(32.0, 54.5),
        Waypoint::new("Moscow", 1.0, 100_000.0, "Oct 1812")
            .with_temperature(Temperature::from_reaumur(0.0))
            .with_location(37.6, 55.8),
    ];

    let log = vec![
        TemperatureReading::new("Oct 18", 0.0),
        TemperatureReading::new("Oct 24", -9.0),
        TemperatureReading::new("Nov 9", -21.0),
        TemperatureReading::new("Nov 14", -11.0),
        TemperatureReading::new("Nov 28", -20.0),
        TemperatureReading::new("Dec 1", -24.0),
        TemperatureReading::new("Dec 6", -30.0),
        TemperatureReading::new("Dec 7", -26.0),
    ];

    Campaign::new(advance, retreat)?.with_temperature_log(log)
}
