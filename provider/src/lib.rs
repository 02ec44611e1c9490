//! Time zone name resolvers
//!
//! This crate provides the [`TimeZoneProvider`] trait, which maps a time
//! zone identifier onto a [`ResolvedZone`], along with two providers that
//! source their rules from TZif data:
//!
//! - [`CompiledTzdbProvider`]: the tzdb bundled by `jiff-tzdb` (requires the
//!   `tzdb` feature).
//! - [`FsTzdbProvider`]: a zoneinfo directory on the file system.
//!
//! Both providers cache parsed rules by identifier, and both are safe to
//! share between threads.
//!
//! ```rust
//! # #[cfg(feature = "tzdb")]
//! # {
//! use timezone_provider::{CompiledTzdbProvider, ResolvedZone, TimeZoneProvider};
//!
//! let provider = CompiledTzdbProvider::default();
//!
//! assert_eq!(provider.resolve("UTC"), Ok(ResolvedZone::Utc));
//! assert_eq!(provider.resolve("Local"), Ok(ResolvedZone::Local));
//!
//! let ResolvedZone::Named(rules) = provider.resolve("Asia/Tokyo").unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(rules.name(), "Asia/Tokyo");
//! # }
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod provider;
pub mod tzdb;
pub mod tzif;

pub use error::TimeZoneProviderError;
pub use provider::{
    ReservedOnlyProvider, ResolvedZone, TimeZoneProvider, LOCAL_IDENTIFIER, UTC_IDENTIFIER,
};
pub use self::tzif::ZoneRules;

#[cfg(feature = "tzdb")]
pub use tzdb::CompiledTzdbProvider;
pub use tzdb::FsTzdbProvider;
