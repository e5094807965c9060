//! Construction errors for symbol maps
//!
//! Absence of a token is never an error: `contains` answers `false` and
//! `lookup` answers `None`. Everything in here is a failure to *build* a map.

use thiserror::Error;

/// Error raised while building a map from configuration data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A configuration value has the wrong shape for its table kind
    #[error("malformed entry '{key}' in map '{map}': {reason}")]
    MalformedEntry {
        map: String,
        key: String,
        reason: String,
    },

    /// A macro descriptor with no handler at all
    #[error("macro '{key}' in map '{map}' has an empty descriptor")]
    EmptyMacro { map: String, key: String },

    /// A macro descriptor whose handler is the empty string
    #[error("macro '{key}' in map '{map}' names an empty handler")]
    EmptyHandler { map: String, key: String },

    /// The first element of a macro descriptor is not a string
    #[error("macro '{key}' in map '{map}': handler must be a string, found {found}")]
    HandlerNotString {
        map: String,
        key: String,
        found: String,
    },

    /// The pattern of a pattern map failed to compile
    #[error("invalid pattern for map '{map}': {source}")]
    InvalidPattern { map: String, source: regex::Error },

    /// A configuration block could not be parsed at all
    #[error("cannot parse configuration block for map '{map}': {message}")]
    Parse { map: String, message: String },

    /// Two maps in one set share a name
    #[error("duplicate map name '{0}'")]
    DuplicateMapName(String),
}

impl TableError {
    pub(crate) fn malformed(map: &str, key: &str, reason: impl Into<String>) -> Self {
        TableError::MalformedEntry {
            map: map.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending key, when the error is tied to one entry
    pub fn key(&self) -> Option<&str> {
        match self {
            TableError::MalformedEntry { key, .. }
            | TableError::EmptyMacro { key, .. }
            | TableError::EmptyHandler { key, .. }
            | TableError::HandlerNotString { key, .. } => Some(key),
            _ => None,
        }
    }
}
