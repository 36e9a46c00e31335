//! Nearest transit stop finder.
//!
//! A small web application that answers: "which MBTA stop is closest to
//! this place, and can I board there in a wheelchair?" A place name is
//! geocoded with Mapbox, then the MBTA stops API is asked for the stop
//! nearest to the resulting coordinates.

pub mod config;
pub mod domain;
pub mod fetch;
pub mod finder;
pub mod geocoder;
pub mod stops;
pub mod web;
