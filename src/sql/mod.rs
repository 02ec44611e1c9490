//! The database column encoding of a `TimeZone`.
//!
//! A `TimeZone` is stored as its canonical identifier in a text column.
//! There is no `NULL` representation; store UTC instead.
//!
//! With the `sqlite` or `postgres` features, `TimeZone` implements the
//! `sqlx` `Type`, `Encode` and `Decode` traits for that database.

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

use timezone_provider::TimeZoneProvider;

use crate::{TimeZone, TzError, TzResult};

/// A cell read from a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlCell<'a> {
    /// SQL `NULL`.
    Null,
    /// A text value.
    Text(&'a str),
    /// A raw value that should hold UTF-8 text.
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for SqlCell<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [u8]> for SqlCell<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, T> From<Option<T>> for SqlCell<'a>
where
    T: Into<SqlCell<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TimeZone {
    /// Reads a database cell into `self`.
    ///
    /// `NULL` is rejected. On error, `self` is left unchanged.
    pub fn scan_with_provider(
        &mut self,
        cell: SqlCell<'_>,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TzResult<()> {
        let identifier = match cell {
            SqlCell::Null => return Err(TzError::null_value_unsupported()),
            SqlCell::Text(text) => text,
            SqlCell::Bytes(bytes) => core::str::from_utf8(bytes).map_err(|_| {
                TzError::malformed_encoding().with_message("time zone column is not valid UTF-8")
            })?,
        };
        self.load_with_provider(identifier, provider)
    }

    /// Returns the value to store in a database column.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        self.name()
    }
}

/// Decodes a cell into a new `TimeZone` with the compiled provider.
#[cfg(any(feature = "sqlite", feature = "postgres"))]
fn decode_cell(cell: SqlCell<'_>) -> TzResult<TimeZone> {
    let mut zone = TimeZone::UTC;
    zone.scan(cell)?;
    Ok(zone)
}
