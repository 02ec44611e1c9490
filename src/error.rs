//! This module implements `TzError`.

use alloc::borrow::Cow;
use core::fmt;

use timezone_provider::TimeZoneProviderError;

/// `TzError`'s error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The identifier does not name a zone known to the provider.
    ZoneNotFound,
    /// The identifier named the host's local time zone.
    UnsupportedLocalZone,
    /// A SQL `NULL` was read into a `TimeZone`.
    NullValueUnsupported,
    /// The input was not a well-formed string token for its encoding.
    MalformedEncoding,
    /// The provider failed for a reason other than an unknown identifier.
    Provider,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoneNotFound => "ZoneNotFound",
            Self::UnsupportedLocalZone => "UnsupportedLocalZone",
            Self::NullValueUnsupported => "NullValueUnsupported",
            Self::MalformedEncoding => "MalformedEncoding",
            Self::Provider => "Provider",
        }
        .fmt(f)
    }
}

/// The error type for loading and decoding a `TimeZone`.
#[derive(Debug, Clone, PartialEq)]
pub struct TzError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl TzError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a zone not found error.
    #[inline]
    #[must_use]
    pub fn zone_not_found() -> Self {
        Self::new(ErrorKind::ZoneNotFound).with_message("zone not found")
    }

    /// Create an unsupported local zone error.
    #[inline]
    #[must_use]
    pub fn unsupported_local_zone() -> Self {
        Self::new(ErrorKind::UnsupportedLocalZone).with_message("unsupported zone: Local")
    }

    /// Create a null value error.
    #[inline]
    #[must_use]
    pub fn null_value_unsupported() -> Self {
        Self::new(ErrorKind::NullValueUnsupported)
            .with_message("NULL not supported for this type, use UTC instead")
    }

    /// Create a malformed encoding error.
    #[inline]
    #[must_use]
    pub const fn malformed_encoding() -> Self {
        Self::new(ErrorKind::MalformedEncoding)
    }

    /// Create a provider error.
    #[inline]
    #[must_use]
    pub const fn provider() -> Self {
        Self::new(ErrorKind::Provider)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for TzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl From<TimeZoneProviderError> for TzError {
    fn from(value: TimeZoneProviderError) -> Self {
        if value.is_not_found() {
            return Self::zone_not_found().with_message(value.message());
        }
        Self::provider().with_message(value.message())
    }
}

impl std::error::Error for TzError {}
