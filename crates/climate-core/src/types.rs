//! Core data types for climate observations

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix epoch seconds)
pub type Timestamp = i64;

/// One parsed observation line.
///
/// Geolocation and pressure are present in the source format but not
/// retained; the aggregation never uses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// State code the observation belongs to (e.g. "CA")
    pub state: String,

    /// Unix timestamp of the observation (seconds)
    pub timestamp: Timestamp,

    /// Relative humidity, 0-100%
    pub humidity: f64,

    /// Snow cover flag, 0.0/1.0 in the source data
    pub snow: f64,

    /// Cloud cover, 0-100%
    pub cloud_cover: f64,

    /// Lightning strike flag, 0.0/1.0 in the source data
    pub lightning: f64,

    /// Surface temperature in Fahrenheit (converted from source Kelvin)
    pub temperature_f: f64,
}

/// The source format encodes snow and lightning as 0.0/1.0 floats.
/// Any nonzero value counts as the flag being set.
pub fn is_flag_set(value: f64) -> bool {
    value != 0.0
}

impl Observation {
    pub fn snow_present(&self) -> bool {
        is_flag_set(self.snow)
    }

    pub fn lightning_present(&self) -> bool {
        is_flag_set(self.lightning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_convention() {
        assert!(!is_flag_set(0.0));
        assert!(is_flag_set(1.0));
        // Anything nonzero counts, even values outside the 0/1 convention
        assert!(is_flag_set(0.5));
        assert!(is_flag_set(-1.0));
    }

    #[test]
    fn test_observation_serde() {
        let json = r#"{
            "state": "CA",
            "timestamp": 1428300000,
            "humidity": 93.0,
            "snow": 0.0,
            "cloud_cover": 100.0,
            "lightning": 0.0,
            "temperature_f": 39.99
        }"#;
        let obs: Observation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.state, "CA");
        assert_eq!(obs.timestamp, 1428300000);
        assert!(!obs.snow_present());
        assert!(!obs.lightning_present());
    }
}
