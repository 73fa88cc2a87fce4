// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

//! Version information stamped in at build time.
//!
//! The build script renders `templates/version.rs.in` into `OUT_DIR`,
//! replacing [`PLACEHOLDER`] with the release version. When stamping is
//! skipped the placeholder text itself becomes the version; reading it never
//! fails; use [`verify`] to catch that case.

use serde::Serialize;

use crate::error::{Error, Result};
pub use crate::stamp::PLACEHOLDER;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/version.rs"));
}

/// Namespace for the release version.
///
/// This type has no values and cannot be constructed:
///
/// ```compile_fail
/// let _version = relstamp::Version;
/// ```
///
/// ```
/// assert_eq!(relstamp::Version::VERSION, relstamp::version());
/// ```
pub enum Version {}

impl Version {
    /// The release version (e.g., "0.2.0").
    pub const VERSION: &'static str = generated::STAMPED_VERSION;
}

/// The release version (e.g., "0.2.0").
pub const VERSION: &str = Version::VERSION;

/// Read the release version.
pub fn version() -> &'static str {
    VERSION
}

/// Whether the build step replaced the placeholder.
pub fn is_stamped() -> bool {
    check(VERSION).is_ok()
}

/// Return the version, or an error if it was never stamped.
pub fn verify() -> Result<&'static str> {
    check(VERSION)
}

/// Like [`verify`], but also require the version to equal `expected`.
pub fn verify_expected(expected: &str) -> Result<&'static str> {
    check_expected(VERSION, expected)
}

/// Check that `value` looks like a stamped version.
pub fn check(value: &str) -> Result<&str> {
    if value.trim().is_empty() {
        return Err(Error::Empty);
    }
    if value.contains(PLACEHOLDER) {
        return Err(Error::Unstamped(value.to_string()));
    }
    Ok(value)
}

pub fn check_expected<'a>(value: &'a str, expected: &str) -> Result<&'a str> {
    let value = check(value)?;
    if value != expected.trim() {
        return Err(Error::Mismatch {
            expected: expected.trim().to_string(),
            found: value.to_string(),
        });
    }
    Ok(value)
}

/// Build details reported by `relstamp --json`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub stamped: bool,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            stamped: is_stamped(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
