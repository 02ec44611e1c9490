//! Time zone providers.
//!
//! Every operation that loads a [`TimeZone`][crate::TimeZone] has a
//! `_with_provider` variant that takes the [`TimeZoneProvider`] to resolve
//! identifiers with. The variants without a provider use
//! [`COMPILED_TZ_PROVIDER`], which is only available with the
//! `compiled_data` feature.

pub use timezone_provider::{
    tzdb::{FsTzdbProvider, TzdbProvider},
    ReservedOnlyProvider, ResolvedZone, TimeZoneProvider, TimeZoneProviderError, ZoneRules,
    LOCAL_IDENTIFIER, UTC_IDENTIFIER,
};

#[cfg(feature = "compiled_data")]
pub use timezone_provider::CompiledTzdbProvider;

#[cfg(feature = "compiled_data")]
use std::sync::LazyLock;

/// The provider used by the provider-less entry points.
///
/// Rules parsed from the bundled tzdb are cached here for the lifetime of
/// the process.
#[cfg(feature = "compiled_data")]
pub static COMPILED_TZ_PROVIDER: LazyLock<CompiledTzdbProvider> =
    LazyLock::new(CompiledTzdbProvider::new);
