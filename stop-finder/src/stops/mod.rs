//! MBTA v3 stops client.
//!
//! Finds the transit stop nearest to a pair of coordinates, sorted by the
//! service itself, and reports its wheelchair boarding status.

mod client;
mod error;
mod types;

pub use client::{MbtaStopLocator, StopsConfig};
pub use error::StopError;
