//! Form payloads accepted by the web layer.

use serde::Deserialize;

/// Submission of the place-name form.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceForm {
    /// Free-text place name or address
    #[serde(default)]
    pub place_name: Option<String>,
}

impl PlaceForm {
    /// The trimmed place name, or `None` when missing or blank.
    pub fn place_name(&self) -> Option<&str> {
        self.place_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
