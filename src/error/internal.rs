use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating corrupted stored data or unexpected client input
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Snowflakes are stored as strings; a row that no longer parses is a bug.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Role name that is not one of Tank, Healer or DPS.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    /// Class name that is not one of the 13 playable classes.
    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    /// Component custom id or select value that does not match any known layout.
    #[error("Malformed custom id '{0}'")]
    MalformedCustomId(String),

    /// Select menu interaction that arrived without a selected value.
    #[error("No value selected in component '{0}'")]
    MissingSelection(String),
}
