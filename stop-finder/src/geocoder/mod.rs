//! Mapbox forward-geocoding client.
//!
//! Resolves a free-text place name to the coordinates of the first
//! candidate Mapbox returns. Transport and decoding failures never escape
//! this module: they come back as [`Lookup::Unavailable`](crate::domain::Lookup).

mod client;
mod error;
mod types;

pub use client::{GeocoderConfig, MapboxGeocoder};
pub use error::GeocodeError;
