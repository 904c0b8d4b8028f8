//! Unit conversion utilities
//!
//! The source data carries surface temperature in Kelvin; the report is
//! in Fahrenheit.

/// Offset between the Kelvin and Fahrenheit scales (absolute zero in F).
const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Convert a temperature from Kelvin to Fahrenheit.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freezing_point() {
        // 273.15 K = 32 F
        let result = kelvin_to_fahrenheit(273.15);
        assert!((result - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_boiling_point() {
        // 373.15 K = 212 F
        let result = kelvin_to_fahrenheit(373.15);
        assert!((result - 212.0).abs() < 0.001);
    }

    #[test]
    fn test_absolute_zero() {
        let result = kelvin_to_fahrenheit(0.0);
        assert!((result + 459.67).abs() < 0.001);
    }
}
