//! The JSON encoding of a `TimeZone`: the identifier as a JSON string.

use alloc::string::String;

use serde::{Serialize, Serializer};
use timezone_provider::TimeZoneProvider;

use crate::{TimeZone, TzError, TzResult};

impl TimeZone {
    /// Encodes this zone as a JSON string literal.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.name()).to_string()
    }

    /// Decodes a JSON value into `self`.
    ///
    /// The JSON literal `null` is accepted and leaves `self` untouched. Any
    /// other input must be a JSON string holding a valid identifier. On
    /// error, `self` is left unchanged.
    pub fn decode_json_with_provider(
        &mut self,
        json: &[u8],
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TzResult<()> {
        let identifier: Option<String> = serde_json::from_slice(json).map_err(
            |#[cfg_attr(not(feature = "log"), allow(unused_variables))] err| {
                #[cfg(feature = "log")]
                log::debug!("rejected time zone JSON: {err}");
                TzError::malformed_encoding().with_message("malformed JSON string")
            },
        )?;
        // Ignore null, like a missing field.
        let Some(identifier) = identifier else {
            return Ok(());
        };
        self.load_with_provider(&identifier, provider)
    }
}

impl Serialize for TimeZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A freshly deserialized value has nothing to keep, so `null` becomes the
/// default value (UTC). Use [`TimeZone::decode_json`] to keep an existing
/// value on `null`.
#[cfg(feature = "compiled_data")]
impl<'de> serde::Deserialize<'de> for TimeZone {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(TimeZoneVisitor)
    }
}

#[cfg(feature = "compiled_data")]
struct TimeZoneVisitor;

#[cfg(feature = "compiled_data")]
impl<'de> serde::de::Visitor<'de> for TimeZoneVisitor {
    type Value = TimeZone;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("an IANA time zone identifier or UTC")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<TimeZone, E> {
        TimeZone::try_from_str(v).map_err(E::custom)
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<TimeZone, E> {
        let v = core::str::from_utf8(v)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Bytes(v), &self))?;
        serde::de::Visitor::visit_str(self, v)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<TimeZone, E> {
        Ok(TimeZone::default())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<TimeZone, E> {
        Ok(TimeZone::default())
    }

    fn visit_some<D: serde::Deserializer<'de>>(self, deserializer: D) -> Result<TimeZone, D::Error> {
        deserializer.deserialize_str(self)
    }
}
