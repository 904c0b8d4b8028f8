//! TDV record parsing
//!
//! One observation per line, nine tab-separated fields:
//! state code, timestamp (ms since epoch), geohash, humidity, snow flag,
//! cloud cover, lightning flag, pressure (Pa), surface temperature (K).

use std::str::FromStr;

use crate::types::Observation;
use crate::units::kelvin_to_fahrenheit;

/// Number of tab-separated fields in a TDV observation line.
pub const FIELD_COUNT: usize = 9;

/// Record parsing error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected 9 tab-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse one TDV line into an [`Observation`].
///
/// The state code is taken verbatim (codes compare exact-match, no case
/// folding). The millisecond timestamp truncates to seconds. Numeric
/// fields tolerate surrounding whitespace, matching the padded columns
/// seen in NOAA exports. Geolocation and pressure are validated but
/// discarded.
pub fn parse_record(line: &str) -> Result<Observation, ParseError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }

    let millis: i64 = numeric(fields[1], "timestamp")?;
    let humidity = numeric(fields[3], "humidity")?;
    let snow = numeric(fields[4], "snow")?;
    let cloud_cover = numeric(fields[5], "cloud cover")?;
    let lightning = numeric(fields[6], "lightning")?;
    let _pressure: f64 = numeric(fields[7], "pressure")?;
    let kelvin: f64 = numeric(fields[8], "surface temperature")?;

    Ok(Observation {
        state: fields[0].to_owned(),
        timestamp: millis / 1000,
        humidity,
        snow,
        cloud_cover,
        lightning,
        temperature_f: kelvin_to_fahrenheit(kelvin),
    })
}

fn numeric<T: FromStr>(raw: &str, field: &'static str) -> Result<T, ParseError> {
    raw.trim().parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: raw.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "CA\t1428300000000\t9prcjqk3yc80\t93.0\t0.0\t100.0\t0.0\t95644.0\t277.58716";

    #[test]
    fn test_parse_sample_line() {
        let obs = parse_record(SAMPLE).unwrap();

        assert_eq!(obs.state, "CA");
        assert_eq!(obs.timestamp, 1428300000);
        assert_eq!(obs.humidity, 93.0);
        assert_eq!(obs.snow, 0.0);
        assert_eq!(obs.cloud_cover, 100.0);
        assert_eq!(obs.lightning, 0.0);
        assert!((obs.temperature_f - kelvin_to_fahrenheit(277.58716)).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_newline_stripped() {
        let with_newline = format!("{SAMPLE}\n");
        let obs = parse_record(&with_newline).unwrap();
        assert_eq!(obs.state, "CA");
    }

    #[test]
    fn test_timestamp_truncates_to_seconds() {
        let line = "TN\t1999\tgeohash\t50.0\t0.0\t0.0\t0.0\t101325.0\t280.0";
        let obs = parse_record(line).unwrap();
        assert_eq!(obs.timestamp, 1);
    }

    #[test]
    fn test_state_code_is_verbatim() {
        let line = "ca\t1000\tgeohash\t50.0\t0.0\t0.0\t0.0\t101325.0\t280.0";
        let obs = parse_record(line).unwrap();
        // No case normalization; "ca" and "CA" are distinct keys.
        assert_eq!(obs.state, "ca");
    }

    #[test]
    fn test_padded_numeric_fields() {
        let line = "WA\t1000\tgeohash\t  61.0\t0.0\t 22.0\t0.0\t102074.0\t 285.10425";
        let obs = parse_record(line).unwrap();
        assert_eq!(obs.humidity, 61.0);
        assert_eq!(obs.cloud_cover, 22.0);
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_record("CA\t1000\tgeohash").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 3 }));
    }

    #[test]
    fn test_empty_line() {
        let err = parse_record("").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { found: 1 }));
    }

    #[test]
    fn test_non_numeric_field() {
        let line = "CA\t1000\tgeohash\tnot-a-number\t0.0\t0.0\t0.0\t101325.0\t280.0";
        let err = parse_record(line).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                field: "humidity",
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_timestamp() {
        let line = "CA\tlater\tgeohash\t50.0\t0.0\t0.0\t0.0\t101325.0\t280.0";
        let err = parse_record(line).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                field: "timestamp",
                ..
            }
        ));
    }
}
