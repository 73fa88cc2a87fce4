// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

//! Build-time release version for Rust binaries.
//!
//! ```
//! println!("running {}", relstamp::Version::VERSION);
//! ```

mod error;
pub mod stamp;
mod version;

pub use error::{Error, Result};
pub use version::{
    BuildInfo, PLACEHOLDER, VERSION, Version, check, check_expected, is_stamped, verify,
    verify_expected, version,
};
