//! Application state for the web layer.

use std::sync::Arc;

use crate::finder::StopFinder;
use crate::geocoder::MapboxGeocoder;
use crate::stops::MbtaStopLocator;

/// The production pipeline: Mapbox geocoding, then MBTA stops.
pub type MbtaStopFinder = StopFinder<MapboxGeocoder, MbtaStopLocator>;

/// Shared application state.
///
/// Built once at startup; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Place name → nearest stop pipeline
    pub finder: Arc<MbtaStopFinder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(geocoder: MapboxGeocoder, locator: MbtaStopLocator) -> Self {
        Self {
            finder: Arc::new(StopFinder::new(geocoder, locator)),
        }
    }
}
