//! Mapbox geocoding response types.
//!
//! Only the parts of a feature needed to locate it are modelled; everything
//! else in the response is ignored.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::domain::{Coordinates, Lookup};

use super::error::GeocodeError;

/// A single geocoding candidate.
#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
}

/// GeoJSON point geometry: `[longitude, latitude, ...]`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<Number>,
}

impl Feature {
    /// Convert the feature's position to coordinates.
    pub fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        match self.geometry.coordinates.as_slice() {
            [longitude, latitude, ..] => {
                Ok(Coordinates::new(latitude.to_string(), longitude.to_string()))
            }
            other => Err(GeocodeError::MalformedFeature {
                message: format!("expected [longitude, latitude], got {} values", other.len()),
            }),
        }
    }
}

/// Extract the first candidate's coordinates from a geocoding response.
///
/// A missing, non-list or empty `features` member means nothing matched.
/// A first candidate without a usable geometry is a shape error.
pub fn first_coordinates(body: &Value) -> Result<Lookup<Coordinates>, GeocodeError> {
    let Some(first) = body
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| features.first())
    else {
        return Ok(Lookup::NotFound);
    };

    let feature = Feature::deserialize(first).map_err(|e| GeocodeError::MalformedFeature {
        message: e.to_string(),
    })?;

    feature.coordinates().map(Lookup::Found)
}
