//! Geographic coordinates as the commerce form stores them.

use serde::{Deserialize, Serialize};

/// Number of decimal digits kept for every stored coordinate.
pub const COORDINATE_DECIMALS: usize = 7;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns this coordinate rounded to [`COORDINATE_DECIMALS`] digits.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            latitude: round_degrees(self.latitude),
            longitude: round_degrees(self.longitude),
        }
    }

    /// Latitude formatted with exactly [`COORDINATE_DECIMALS`] digits.
    #[must_use]
    pub fn latitude_text(&self) -> String {
        format_degrees(self.latitude)
    }

    /// Longitude formatted with exactly [`COORDINATE_DECIMALS`] digits.
    #[must_use]
    pub fn longitude_text(&self) -> String {
        format_degrees(self.longitude)
    }

    /// Reads a coordinate back from the two form fields.
    ///
    /// Returns `None` unless both fields hold a finite number; a half-filled
    /// pair never produces a coordinate.
    #[must_use]
    pub fn from_fields(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = parse_degrees(latitude)?;
        let longitude = parse_degrees(longitude)?;
        Some(Self::new(latitude, longitude))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude_text(), self.longitude_text())
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn round_degrees(value: f64) -> f64 {
    // 10^7 fits exactly in an f64 mantissa.
    let scale = 10_000_000.0_f64;
    (value * scale).round() / scale
}

fn format_degrees(value: f64) -> String {
    format!("{:.*}", COORDINATE_DECIMALS, round_degrees(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_keeps_seven_decimals() {
        let c = Coordinate::new(-34.603_712_345_6, -58.381_549_999_9).rounded();
        assert!((c.latitude - -34.603_712_3).abs() < 1e-12);
        assert!((c.longitude - -58.381_55).abs() < 1e-12);
    }

    #[test]
    fn text_is_padded_to_seven_digits() {
        let c = Coordinate::new(-34.6037, -58.3815);
        assert_eq!(c.latitude_text(), "-34.6037000");
        assert_eq!(c.longitude_text(), "-58.3815000");
        assert_eq!(c.to_string(), "-34.6037000, -58.3815000");
    }

    #[test]
    fn from_fields_requires_both_values() {
        assert!(Coordinate::from_fields("-34.6", "").is_none());
        assert!(Coordinate::from_fields("", "-58.3").is_none());
        assert!(Coordinate::from_fields("  ", "  ").is_none());
    }

    #[test]
    fn from_fields_rejects_non_numbers() {
        assert!(Coordinate::from_fields("abc", "-58.3").is_none());
        assert!(Coordinate::from_fields("NaN", "-58.3").is_none());
        assert!(Coordinate::from_fields("inf", "-58.3").is_none());
    }

    #[test]
    fn from_fields_parses_trimmed_numbers() {
        let c = Coordinate::from_fields(" -34.6037000 ", "-58.3815000").expect("valid pair");
        assert_eq!(c, Coordinate::new(-34.6037, -58.3815));
    }
}
