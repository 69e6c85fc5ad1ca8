//! Unit-aware formatting for the values shown on the strip.

use serde::{Deserialize, Serialize};

const METERS_PER_KILOMETER: f64 = 1000.0;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
const METERS_PER_STATUTE_MILE: f64 = 1609.344;
const METERS_PER_FOOT: f64 = 0.3048;

/// User-selected distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    NauticalMiles,
    StatuteMiles,
}

impl DistanceUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
            DistanceUnit::NauticalMiles => METERS_PER_NAUTICAL_MILE,
            DistanceUnit::StatuteMiles => METERS_PER_STATUTE_MILE,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::NauticalMiles => "NM",
            DistanceUnit::StatuteMiles => "mi",
        }
    }
}

/// User-selected altitude unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AltitudeUnit {
    #[default]
    Meters,
    Feet,
}

impl AltitudeUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            AltitudeUnit::Meters => 1.0,
            AltitudeUnit::Feet => METERS_PER_FOOT,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            AltitudeUnit::Meters => "m",
            AltitudeUnit::Feet => "ft",
        }
    }
}

/// The unit selections consumed by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitSettings {
    pub distance: DistanceUnit,
    pub altitude: AltitudeUnit,
}

/// Format a distance in meters as a one-decimal value with unit suffix.
pub fn format_distance(meters: f64, units: &UnitSettings) -> String {
    let value = meters / units.distance.meters_per_unit();
    format!("{:.1} {}", value, units.distance.suffix())
}

/// Format a relative altitude in meters with an explicit sign, rounded to a
/// whole unit.
pub fn format_relative_altitude(meters: f64, units: &UnitSettings) -> String {
    let value = meters / units.altitude.meters_per_unit();
    format!("{:+.0} {}", value, units.altitude.suffix())
}

/// Format a required glide ratio for the bracketed distance suffix.
///
/// Non-positive ratios render as the `##` placeholder and anything at or
/// above 99.5 saturates to `99+`.
pub fn format_glide_ratio(ratio: f64) -> String {
    if ratio <= 0.0 {
        "##".to_string()
    } else if ratio >= 99.5 {
        "99+".to_string()
    } else {
        format!("{ratio:.1}")
    }
}
