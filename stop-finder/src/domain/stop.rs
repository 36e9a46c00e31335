//! Transit stop type.

/// Upstream wheelchair boarding code meaning "fully accessible".
pub const WHEELCHAIR_ACCESSIBLE: i64 = 1;

/// The nearest transit stop and whether it can be boarded in a wheelchair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Display name of the stop
    pub name: String,
    /// Whether wheelchair boarding is available
    pub wheelchair_accessible: bool,
}

impl Stop {
    /// Create a stop from its name and the raw upstream boarding code.
    ///
    /// Only the integer [`WHEELCHAIR_ACCESSIBLE`] counts as accessible;
    /// missing, null, other integers, floats and strings do not.
    pub fn from_boarding_code(name: impl Into<String>, code: Option<&serde_json::Value>) -> Self {
        let wheelchair_accessible =
            code.and_then(serde_json::Value::as_i64) == Some(WHEELCHAIR_ACCESSIBLE);

        Self {
            name: name.into(),
            wheelchair_accessible,
        }
    }
}
