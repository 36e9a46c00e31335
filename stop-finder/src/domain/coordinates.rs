//! Geographic coordinates.

use std::fmt;

/// A latitude/longitude pair as returned by the geocoder.
///
/// Both parts are kept as the numeric text the upstream service sent, so
/// they can be forwarded to the stops query without any float round-trip.
/// No range validation is performed.
///
/// # Examples
///
/// ```
/// use stop_finder::domain::Coordinates;
///
/// let boston = Coordinates::new("42.3601", "-71.0589");
/// assert_eq!(boston.latitude(), "42.3601");
/// assert_eq!(boston.to_string(), "42.3601, -71.0589");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    latitude: String,
    longitude: String,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude text.
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Latitude as text.
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Longitude as text.
    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let coords = Coordinates::new("42.3601", "-71.0589");
        assert_eq!(coords.latitude(), "42.3601");
        assert_eq!(coords.longitude(), "-71.0589");
    }

    #[test]
    fn display_is_lat_then_lng() {
        let coords = Coordinates::new("1.5", "-2.25");
        assert_eq!(coords.to_string(), "1.5, -2.25");
    }
}
