// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

use std::env;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/stamp.rs"]
mod stamp;

const TEMPLATE: &str = "templates/version.rs.in";

fn main() {
    println!("cargo:rerun-if-changed={}", TEMPLATE);
    println!("cargo:rerun-if-changed=src/stamp.rs");
    println!("cargo:rerun-if-env-changed={}", stamp::RELEASE_VERSION_ENV);
    println!("cargo:rerun-if-env-changed={}", stamp::SKIP_STAMP_ENV);

    let override_version = env::var(stamp::RELEASE_VERSION_ENV).ok();
    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let release = stamp::resolve(override_version.as_deref(), &package_version);

    let skip = stamp::skip_requested(env::var(stamp::SKIP_STAMP_ENV).ok().as_deref());
    let version = match (&release, skip) {
        (_, true) => {
            println!(
                "cargo:warning={} is set, version left as {}",
                stamp::SKIP_STAMP_ENV,
                stamp::PLACEHOLDER
            );
            None
        }
        (None, false) => {
            println!(
                "cargo:warning=no release version available, version left as {}",
                stamp::PLACEHOLDER
            );
            None
        }
        (Some(release), false) => Some(release.as_str()),
    };

    // Exported for the exact-match tests.
    println!(
        "cargo:rustc-env=RELSTAMP_EXPECTED_VERSION={}",
        release.as_deref().unwrap_or_default()
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));

    if let Err(e) = stamp::stamp(
        &manifest_dir.join(TEMPLATE),
        &out_dir.join("version.rs"),
        version,
    ) {
        panic!("Failed to stamp {}: {}", TEMPLATE, e);
    }
}
