//! This module implements `TimeZone`.

use core::fmt;

use timezone_provider::{ResolvedZone, TimeZoneProvider, ZoneRules, LOCAL_IDENTIFIER, UTC_IDENTIFIER};

use crate::{TzError, TzResult};

/// A validated IANA time zone identifier, or UTC.
///
/// A `TimeZone` is meant to be used as a struct field: it is always valid,
/// and it has exactly one representation of UTC. The default value is UTC,
/// and loading `"UTC"` (or the empty string) produces a value equal to the
/// default.
///
/// The host's local time zone is never accepted; its meaning depends on the
/// machine that reads it.
///
/// Values are immutable once loaded. The `load*` and `decode*` methods
/// replace the whole value on success and leave it untouched on failure.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeZone {
    // `None` is UTC.
    rules: Option<ZoneRules>,
}

impl TimeZone {
    /// The UTC time zone; equal to `TimeZone::default()`.
    pub const UTC: Self = Self { rules: None };

    /// Loads the zone named `identifier` with the provided provider.
    pub fn try_from_str_with_provider(
        identifier: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TzResult<Self> {
        let zone = provider.resolve(identifier).map_err(|err| {
            #[cfg(feature = "log")]
            log::debug!("unable to resolve time zone {identifier:?}: {err}");
            let err = TzError::from(err);
            if err.kind() == crate::ErrorKind::ZoneNotFound {
                return err.with_message(format!("unknown time zone {identifier}"));
            }
            err
        })?;
        Self::try_from_resolved(zone)
    }

    /// Creates a `TimeZone` from a zone returned by a provider.
    ///
    /// A provider may hand back the rules for UTC or for the local zone under
    /// their own names; both are normalized here as well.
    pub fn try_from_resolved(zone: ResolvedZone) -> TzResult<Self> {
        match zone {
            ResolvedZone::Local => Err(reject_local_zone(LOCAL_IDENTIFIER)),
            ResolvedZone::Named(rules) if rules.name() == LOCAL_IDENTIFIER => {
                Err(reject_local_zone(rules.name()))
            }
            ResolvedZone::Utc => Ok(Self::UTC),
            ResolvedZone::Named(rules) if rules.name() == UTC_IDENTIFIER => Ok(Self::UTC),
            ResolvedZone::Named(rules) => Ok(Self { rules: Some(rules) }),
        }
    }

    /// Replaces `self` with the zone named `identifier`.
    ///
    /// On error, `self` is left unchanged.
    pub fn load_with_provider(
        &mut self,
        identifier: &str,
        provider: &(impl TimeZoneProvider + ?Sized),
    ) -> TzResult<()> {
        *self = Self::try_from_str_with_provider(identifier, provider)?;
        Ok(())
    }

    /// Returns the canonical identifier of this zone.
    ///
    /// UTC is always rendered as `"UTC"`; any other zone renders as the
    /// identifier it was loaded with.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.rules.as_ref().map_or(UTC_IDENTIFIER, ZoneRules::name)
    }

    /// Returns whether this is the UTC time zone.
    #[inline]
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.rules.is_none()
    }

    /// Returns the rules of this zone, or `None` for UTC.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> Option<&ZoneRules> {
        self.rules.as_ref()
    }

    /// Returns the resolved zone for this value.
    ///
    /// This is never [`ResolvedZone::Local`].
    #[must_use]
    pub fn zone(&self) -> ResolvedZone {
        self.rules
            .clone()
            .map_or(ResolvedZone::Utc, ResolvedZone::Named)
    }
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
fn reject_local_zone(identifier: &str) -> TzError {
    #[cfg(feature = "log")]
    log::debug!("rejected time zone {identifier:?}: the local zone is not supported");
    TzError::unsupported_local_zone()
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimeZone").field(&self.name()).finish()
    }
}

impl AsRef<str> for TimeZone {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl TryFrom<ResolvedZone> for TimeZone {
    type Error = TzError;

    fn try_from(value: ResolvedZone) -> Result<Self, Self::Error> {
        Self::try_from_resolved(value)
    }
}

impl From<TimeZone> for ResolvedZone {
    fn from(value: TimeZone) -> Self {
        value
            .rules
            .map_or(ResolvedZone::Utc, ResolvedZone::Named)
    }
}
