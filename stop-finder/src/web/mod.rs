//! Web layer for the stop finder.
//!
//! One route: `GET /` shows the place-name form, `POST /` runs the lookup
//! and renders either the nearest stop or an error page.

mod dto;
mod routes;
mod state;
pub mod templates;

#[cfg(test)]
mod routes_tests;

pub use dto::PlaceForm;
pub use routes::{AppError, create_router};
pub use state::{AppState, MbtaStopFinder};
pub use templates::*;
