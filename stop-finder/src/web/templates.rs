//! Askama templates for the web frontend.

use askama::Template;

use crate::finder::NearestStop;

/// Home page with the place-name form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Nearest-stop result page.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub place_name: String,
    pub station_name: String,
    pub wheelchair_accessible: bool,
}

impl ResultTemplate {
    /// Create from a pipeline result.
    pub fn from_nearest(nearest: &NearestStop) -> Self {
        Self {
            place_name: nearest.place_name.clone(),
            station_name: nearest.stop.name.clone(),
            wheelchair_accessible: nearest.stop.wheelchair_accessible,
        }
    }

    /// "Yes" or "No".
    pub fn accessibility_label(&self) -> &'static str {
        if self.wheelchair_accessible { "Yes" } else { "No" }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
