//! Entry points that resolve identifiers with [`COMPILED_TZ_PROVIDER`].

use core::str::FromStr;

use crate::provider::COMPILED_TZ_PROVIDER;
use crate::{SqlCell, TimeZone, TzError, TzResult};

impl TimeZone {
    /// Loads the zone named `identifier` from the bundled tzdb.
    ///
    /// ```rust
    /// use tzfield::TimeZone;
    ///
    /// let zone = TimeZone::try_from_str("America/New_York")?;
    /// assert_eq!(zone.name(), "America/New_York");
    ///
    /// assert_eq!(TimeZone::try_from_str("UTC")?, TimeZone::default());
    /// assert!(TimeZone::try_from_str("Local").is_err());
    /// # Ok::<(), tzfield::TzError>(())
    /// ```
    pub fn try_from_str(identifier: &str) -> TzResult<Self> {
        Self::try_from_str_with_provider(identifier, &*COMPILED_TZ_PROVIDER)
    }

    /// Replaces `self` with the zone named `identifier`.
    ///
    /// On error, `self` is left unchanged.
    pub fn load(&mut self, identifier: &str) -> TzResult<()> {
        self.load_with_provider(identifier, &*COMPILED_TZ_PROVIDER)
    }

    /// Decodes `text` as a time zone identifier into `self`.
    ///
    /// On error, `self` is left unchanged.
    pub fn decode_text(&mut self, text: &[u8]) -> TzResult<()> {
        self.decode_text_with_provider(text, &*COMPILED_TZ_PROVIDER)
    }

    /// Decodes a JSON value into `self`.
    ///
    /// `null` is accepted and leaves `self` untouched.
    ///
    /// ```rust
    /// use tzfield::TimeZone;
    ///
    /// let mut zone = TimeZone::default();
    /// zone.decode_json(br#""Asia/Tokyo""#)?;
    /// assert_eq!(zone.to_json(), r#""Asia/Tokyo""#);
    ///
    /// zone.decode_json(b"null")?;
    /// assert_eq!(zone.name(), "Asia/Tokyo");
    /// # Ok::<(), tzfield::TzError>(())
    /// ```
    pub fn decode_json(&mut self, json: &[u8]) -> TzResult<()> {
        self.decode_json_with_provider(json, &*COMPILED_TZ_PROVIDER)
    }

    /// Reads a database cell into `self`.
    ///
    /// ```rust
    /// use tzfield::{ErrorKind, SqlCell, TimeZone};
    ///
    /// let mut zone = TimeZone::default();
    /// zone.scan(SqlCell::from("America/New_York"))?;
    /// assert_eq!(zone.value(), "America/New_York");
    ///
    /// let err = zone.scan(SqlCell::Null).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NullValueUnsupported);
    /// assert_eq!(zone.value(), "America/New_York");
    /// # Ok::<(), tzfield::TzError>(())
    /// ```
    pub fn scan(&mut self, cell: SqlCell<'_>) -> TzResult<()> {
        self.scan_with_provider(cell, &*COMPILED_TZ_PROVIDER)
    }
}

impl FromStr for TimeZone {
    type Err = TzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}
