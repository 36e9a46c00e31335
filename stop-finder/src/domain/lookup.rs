//! Outcome of a single upstream lookup.

use crate::fetch::FetchError;

/// Result of asking an upstream service for one value.
///
/// Keeps "the service answered but had nothing" apart from "the service
/// could not be asked", while letting callers treat both as absence.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The service returned at least one candidate; this is the first.
    Found(T),
    /// The service answered with an empty candidate list.
    NotFound,
    /// The request or its decoding failed; no candidates were seen.
    Unavailable(FetchError),
}

impl<T> Lookup<T> {
    /// Returns the found value, treating both kinds of absence as `None`.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Unavailable(_) => None,
        }
    }
}
