//! Error types for time zone providers

use core::fmt;

/// An error returned while resolving a time zone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneProviderError {
    /// The identifier is not present in the time zone database.
    NotFound(&'static str),
    /// The identifier can never name a zone, e.g. it escapes the zoneinfo
    /// directory.
    InvalidIdentifier(&'static str),
    /// The rules for an existing identifier could not be read or parsed.
    Data(&'static str),
    /// An internal assertion failed.
    Assert(&'static str),
}

impl TimeZoneProviderError {
    /// Returns whether this error means the identifier does not name a zone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidIdentifier(_))
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound(msg)
            | Self::InvalidIdentifier(msg)
            | Self::Data(msg)
            | Self::Assert(msg) => msg,
        }
    }
}

impl fmt::Display for TimeZoneProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "NotFound: {msg}"),
            Self::InvalidIdentifier(msg) => write!(f, "InvalidIdentifier: {msg}"),
            Self::Data(msg) => write!(f, "Data: {msg}"),
            Self::Assert(msg) => write!(f, "Assert: {msg}"),
        }
    }
}

impl std::error::Error for TimeZoneProviderError {}
