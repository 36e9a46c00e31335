//! Domain types for the stop finder.
//!
//! Every value here lives for a single request: the coordinates a place
//! resolves to, the stop nearest to them, and the three-way outcome of
//! asking an upstream service for either.

mod coordinates;
mod lookup;
mod stop;

pub use coordinates::Coordinates;
pub use lookup::Lookup;
pub use stop::{Stop, WHEELCHAIR_ACCESSIBLE};
