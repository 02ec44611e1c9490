//! The `TimeZoneProvider` trait.

use crate::{tzif::ZoneRules, TimeZoneProviderError};

pub(crate) type TimeZoneProviderResult<T> = Result<T, TimeZoneProviderError>;

/// The identifier of the UTC time zone.
pub const UTC_IDENTIFIER: &str = "UTC";

/// The reserved identifier for the host's local time zone.
pub const LOCAL_IDENTIFIER: &str = "Local";

/// The zone an identifier resolved to.
///
/// `Utc` and `Local` are sentinels: every provider answers them without
/// consulting its data, so callers compare against the tag instead of
/// against any particular set of rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedZone {
    /// The UTC time zone.
    Utc,
    /// The host's local time zone, whatever it happens to be.
    Local,
    /// A named zone from the time zone database.
    Named(ZoneRules),
}

impl ResolvedZone {
    /// Returns the canonical identifier of this zone.
    pub fn name(&self) -> &str {
        match self {
            Self::Utc => UTC_IDENTIFIER,
            Self::Local => LOCAL_IDENTIFIER,
            Self::Named(rules) => rules.name(),
        }
    }

    /// Resolves the identifiers every provider reserves.
    ///
    /// The empty identifier and `"UTC"` are UTC, `"Local"` is the local
    /// zone. Every other identifier returns `None`.
    pub fn from_reserved(identifier: &str) -> Option<Self> {
        match identifier {
            "" | UTC_IDENTIFIER => Some(Self::Utc),
            LOCAL_IDENTIFIER => Some(Self::Local),
            _ => None,
        }
    }
}

/// The `TimeZoneProvider` trait maps a time zone identifier onto the rules
/// for that zone.
///
/// Identifiers are matched exactly; a provider must not return a zone whose
/// name differs from the requested identifier, including by case.
pub trait TimeZoneProvider {
    /// Resolves `identifier` into a zone.
    fn resolve(&self, identifier: &str) -> Result<ResolvedZone, TimeZoneProviderError>;

    /// Returns whether `identifier` resolves with this provider.
    fn check_identifier(&self, identifier: &str) -> bool {
        self.resolve(identifier).is_ok()
    }
}

impl<P: TimeZoneProvider + ?Sized> TimeZoneProvider for &P {
    fn resolve(&self, identifier: &str) -> Result<ResolvedZone, TimeZoneProviderError> {
        (**self).resolve(identifier)
    }
}

/// A provider that only knows the reserved identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReservedOnlyProvider;

impl TimeZoneProvider for ReservedOnlyProvider {
    fn resolve(&self, identifier: &str) -> Result<ResolvedZone, TimeZoneProviderError> {
        ResolvedZone::from_reserved(identifier).ok_or(TimeZoneProviderError::NotFound(
            "Time zone identifier does not exist.",
        ))
    }
}
