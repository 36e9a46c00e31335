//! Place name → nearest stop pipeline.
//!
//! [`StopFinder`] runs the two lookups strictly in order: geocode the place,
//! then ask for the stop nearest to the result. If the first lookup comes
//! back empty the second is never issued.

use std::future::Future;

use tracing::{info, warn};

use crate::domain::{Coordinates, Lookup, Stop};
use crate::geocoder::GeocodeError;
use crate::stops::StopError;

/// Resolves a place name to coordinates.
pub trait Geocode {
    /// Geocode `place_name`, returning the first candidate's coordinates.
    fn geocode(
        &self,
        place_name: &str,
    ) -> impl Future<Output = Result<Lookup<Coordinates>, GeocodeError>> + Send;
}

/// Finds the stop nearest to a pair of coordinates.
pub trait LocateStop {
    /// Locate the stop nearest to `coords`.
    fn locate(
        &self,
        coords: &Coordinates,
    ) -> impl Future<Output = Result<Lookup<Stop>, StopError>> + Send;
}

/// Why no stop could be produced for a place.
#[derive(Debug, thiserror::Error)]
pub enum FindStopError {
    /// Geocoding gave no coordinates (nothing matched, or the call failed)
    #[error("could not determine location for \"{place_name}\"")]
    LocationNotFound { place_name: String },

    /// The place was located but no stop came back for it
    #[error("no nearby stop found for \"{place_name}\"")]
    NoNearbyStop { place_name: String },

    /// The geocoding response had an unexpected shape
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The stops response had an unexpected shape
    #[error(transparent)]
    Stops(#[from] StopError),
}

impl FindStopError {
    /// Whether this is an absent result rather than an unexpected failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FindStopError::LocationNotFound { .. } | FindStopError::NoNearbyStop { .. }
        )
    }
}

/// A successfully resolved place and its nearest stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestStop {
    /// The place name as submitted
    pub place_name: String,
    /// Where the place resolved to
    pub coordinates: Coordinates,
    /// The nearest stop
    pub stop: Stop,
}

/// Composes a geocoder and a stop locator.
#[derive(Debug, Clone)]
pub struct StopFinder<G, S> {
    geocoder: G,
    locator: S,
}

impl<G: Geocode, S: LocateStop> StopFinder<G, S> {
    /// Create a finder from its two stages.
    pub fn new(geocoder: G, locator: S) -> Self {
        Self { geocoder, locator }
    }

    /// Find the stop nearest to `place_name`.
    ///
    /// Fetch failures in either stage count as "nothing found"; only
    /// malformed responses surface as [`FindStopError::Geocode`] or
    /// [`FindStopError::Stops`].
    pub async fn find_stop_near(&self, place_name: &str) -> Result<NearestStop, FindStopError> {
        let coordinates = match self.geocoder.geocode(place_name).await? {
            Lookup::Found(coords) => coords,
            Lookup::NotFound => {
                info!(place_name, "could not determine location");
                return Err(FindStopError::LocationNotFound {
                    place_name: place_name.to_string(),
                });
            }
            Lookup::Unavailable(e) => {
                warn!(place_name, error = %e, "geocoder unavailable, treating as not found");
                return Err(FindStopError::LocationNotFound {
                    place_name: place_name.to_string(),
                });
            }
        };

        let Some(stop) = self.locator.locate(&coordinates).await?.found() else {
            info!(place_name, %coordinates, "no nearby stop found");
            return Err(FindStopError::NoNearbyStop {
                place_name: place_name.to_string(),
            });
        };

        info!(place_name, stop = %stop.name, accessible = stop.wheelchair_accessible, "stop found");

        Ok(NearestStop {
            place_name: place_name.to_string(),
            coordinates,
            stop,
        })
    }
}
