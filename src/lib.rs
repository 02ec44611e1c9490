//! The `tzfield` crate provides [`TimeZone`], a validated IANA time zone
//! identifier meant to be stored in struct fields and persisted as text,
//! JSON or a database column.
//!
//! ```rust
//! use tzfield::TimeZone;
//!
//! // The default value is UTC.
//! let mut zone = TimeZone::default();
//! assert_eq!(zone.name(), "UTC");
//!
//! // Loading a name replaces the value.
//! zone.load("America/New_York")?;
//! assert_eq!(zone.to_string(), "America/New_York");
//!
//! // A failed load leaves it untouched.
//! assert!(zone.load("Local").is_err());
//! assert_eq!(zone.name(), "America/New_York");
//! # Ok::<(), tzfield::TzError>(())
//! ```
//!
//! A `TimeZone` inside a serde struct is encoded as its identifier:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use tzfield::TimeZone;
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     zone: TimeZone,
//! }
//!
//! let user = User {
//!     name: "ken".into(),
//!     zone: "Asia/Tokyo".parse()?,
//! };
//! let json = serde_json::to_string(&user).unwrap();
//! assert_eq!(json, r#"{"name":"ken","zone":"Asia/Tokyo"}"#);
//!
//! let user: User = serde_json::from_str(&json).unwrap();
//! assert_eq!(user.zone.name(), "Asia/Tokyo");
//! # Ok::<(), tzfield::TzError>(())
//! ```
//!
//! ## Providers
//!
//! Identifiers are resolved by a [`TimeZoneProvider`][provider::TimeZoneProvider].
//! With the default `compiled_data` feature, the methods without a
//! `_with_provider` suffix use the tzdb bundled into the binary. A zoneinfo
//! directory can be used instead through
//! [`FsTzdbProvider`][provider::FsTzdbProvider].
//!
//! ## Features
//!
//! - `compiled_data` (default): the bundled tzdb and the provider-less API.
//! - `log` (default): debug logging of rejected identifiers.
//! - `sqlite`, `postgres`: `sqlx` column support for `TimeZone`.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    // Dev-dependencies are only used by some test targets.
    unused_crate_dependencies,
    clippy::module_name_repetitions
)]

extern crate alloc;

pub mod error;
pub mod provider;
pub mod sql;

#[cfg(feature = "compiled_data")]
mod compiled;
mod json;
mod text;
mod timezone;

#[cfg(test)]
mod test_utils;

#[doc(inline)]
pub use error::{ErrorKind, TzError};
#[doc(inline)]
pub use sql::SqlCell;
#[doc(inline)]
pub use timezone::TimeZone;

/// The `Result` type returned by `tzfield`.
pub type TzResult<T> = Result<T, TzError>;
