//! # guarded-shared
//!
//! Shared error envelope for the guarded workspace.
//!
//! Every crate reports failures through its own typed error and converts
//! into [`ErrorEnvelope`] at a boundary, so callers that aggregate errors
//! from several layers see one stable shape:
//!
//! - [`ErrorKind`] says where the failure came from
//! - [`ErrorClass`] says whether retrying can help (never, for validation)
//! - [`ErrorCode`] is a stable `namespace:code` identifier
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - The envelope serializes for logs and diagnostics

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
