//! The text encoding of a `TimeZone`: the bare identifier as UTF-8.

use alloc::vec::Vec;

use timezone_provider::TimeZoneProvider;

use crate::{TimeZone, TzError, TzResult};

impl TimeZone {
    /// Encodes this zone as its canonical identifier.
    #[must_use]
    pub fn to_text(&self) -> Vec<u8> {
        self.name().as_bytes().to_vec()
    }

    /// Decodes `text` as a time zone identifier into `self`.
    ///
    /// `text` must be valid UTF-8. On error, `self` is left unchanged.
    pub fn decode_text_with_provider(
        &mut self,
        text: &[u8],
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TzResult<()> {
        let identifier = core::str::from_utf8(text).map_err(|_| {
            TzError::malformed_encoding().with_message("time zone text is not valid UTF-8")
        })?;
        self.load_with_provider(identifier, provider)
    }
}
