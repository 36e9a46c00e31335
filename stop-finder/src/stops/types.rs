//! MBTA stops response types (JSON:API resources).

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Lookup, Stop};

use super::error::StopError;

/// A stop resource from the `data` list.
#[derive(Debug, Deserialize)]
pub struct StopResource {
    pub attributes: StopAttributes,
}

/// The attributes we read from a stop resource.
#[derive(Debug, Deserialize)]
pub struct StopAttributes {
    /// Must be present; `null` means the service has no stop to report.
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,

    /// Raw boarding code: 0 unknown, 1 accessible, 2 inaccessible.
    /// Kept untyped so odd values don't make the entry malformed.
    #[serde(default)]
    pub wheelchair_boarding: Option<Value>,
}

impl StopResource {
    /// Convert to a stop, or `None` when the name is null.
    pub fn into_stop(self) -> Option<Stop> {
        let StopAttributes {
            name,
            wheelchair_boarding,
        } = self.attributes;
        name.map(|name| Stop::from_boarding_code(name, wheelchair_boarding.as_ref()))
    }
}

/// Extract the nearest stop from a stops response.
///
/// The service sorts by distance, so the first entry is the nearest. A
/// first entry with a null name counts as no stop.
pub fn nearest_stop(body: &Value) -> Result<Lookup<Stop>, StopError> {
    let Some(first) = body
        .get("data")
        .and_then(Value::as_array)
        .and_then(|stops| stops.first())
    else {
        return Ok(Lookup::NotFound);
    };

    let resource = StopResource::deserialize(first).map_err(|e| StopError::MalformedStop {
        message: e.to_string(),
    })?;

    Ok(match resource.into_stop() {
        Some(stop) => Lookup::Found(stop),
        None => Lookup::NotFound,
    })
}
