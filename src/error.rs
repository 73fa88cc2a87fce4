// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Version was not stamped at build time (found `{0}`)")]
    Unstamped(String),

    #[error("Version is empty")]
    Empty,

    #[error("Version mismatch: expected {expected}, found {found}")]
    Mismatch { expected: String, found: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error means the build step never substituted the version.
    pub fn is_unstamped(&self) -> bool {
        matches!(self, Error::Unstamped(_) | Error::Empty)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
