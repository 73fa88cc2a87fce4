// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jason Ish

//! Placeholder substitution for the generated version file.
//!
//! This module is compiled twice: into the build script through a `#[path]`
//! include, and into the library so it can be unit tested. It must only
//! depend on `std`.

use std::fs;
use std::io;
use std::path::Path;

/// Token replaced with the release version.
pub const PLACEHOLDER: &str = "${project.version}";

/// Environment variable overriding the release version.
pub const RELEASE_VERSION_ENV: &str = "RELSTAMP_RELEASE_VERSION";

/// Environment variable that leaves the placeholder unresolved.
pub const SKIP_STAMP_ENV: &str = "RELSTAMP_SKIP_STAMP";

/// Pick the release version to stamp.
///
/// A non-blank override wins over the package version. Returns `None` when
/// both are blank.
pub fn resolve(override_version: Option<&str>, package_version: &str) -> Option<String> {
    override_version
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| Some(package_version.trim()).filter(|v| !v.is_empty()))
        .map(str::to_string)
}

/// Whether the value of the skip variable asks to leave the placeholder.
pub fn skip_requested(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "0" | "false" | "no"),
    }
}

/// Replace every placeholder in `template` with `version`.
///
/// The template places the token inside a Rust string literal, so the
/// version is escaped accordingly. `None` returns the template as is.
pub fn render(template: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => template.replace(PLACEHOLDER, &version.escape_default().to_string()),
        None => template.to_string(),
    }
}

/// Render `template_path` into `out_path`.
///
/// The output is only written when its contents change, so unchanged builds
/// don't trigger recompilation. Returns `true` if the file was written.
pub fn stamp(template_path: &Path, out_path: &Path, version: Option<&str>) -> io::Result<bool> {
    let template = fs::read_to_string(template_path)?;
    let rendered = render(&template, version);

    if fs::read_to_string(out_path).is_ok_and(|existing| existing == rendered) {
        return Ok(false);
    }

    fs::write(out_path, rendered)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "pub const STAMPED_VERSION: &str = \"${project.version}\";\n";

    #[test]
    fn test_render_substitutes_release_version() {
        assert_eq!(
            render(TEMPLATE, Some("2.0.1")),
            "pub const STAMPED_VERSION: &str = \"2.0.1\";\n"
        );
    }

    #[test]
    fn test_render_without_version_keeps_placeholder() {
        let rendered = render(TEMPLATE, None);
        assert_eq!(rendered, TEMPLATE);
        assert!(rendered.contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = "${project.version} and ${project.version}";
        assert_eq!(render(template, Some("1.4.2")), "1.4.2 and 1.4.2");
    }

    #[test]
    fn test_render_escapes_literal_characters() {
        let rendered = render(TEMPLATE, Some("1.0\"-rc\\1"));
        assert_eq!(
            rendered,
            "pub const STAMPED_VERSION: &str = \"1.0\\\"-rc\\\\1\";\n"
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(Some("2.0.1"), "0.2.0").as_deref(), Some("2.0.1"));
        assert_eq!(resolve(Some(" 3.1.0 \n"), "0.2.0").as_deref(), Some("3.1.0"));
        assert_eq!(resolve(Some("   "), "0.2.0").as_deref(), Some("0.2.0"));
        assert_eq!(resolve(None, "0.2.0").as_deref(), Some("0.2.0"));
        assert_eq!(resolve(None, ""), None);
        assert_eq!(resolve(Some(""), " "), None);
    }

    #[test]
    fn test_skip_requested() {
        assert!(!skip_requested(None));
        assert!(!skip_requested(Some("")));
        assert!(!skip_requested(Some("0")));
        assert!(!skip_requested(Some("False")));
        assert!(!skip_requested(Some("no")));
        assert!(skip_requested(Some("1")));
        assert!(skip_requested(Some("true")));
        assert!(skip_requested(Some("yes")));
    }

    #[test]
    fn test_stamp_writes_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("version.rs.in");
        let out_path = dir.path().join("version.rs");
        fs::write(&template_path, TEMPLATE).unwrap();

        assert!(stamp(&template_path, &out_path, Some("2.0.1")).unwrap());
        assert_eq!(
            fs::read_to_string(&out_path).unwrap(),
            "pub const STAMPED_VERSION: &str = \"2.0.1\";\n"
        );

        // Same input, nothing to do.
        assert!(!stamp(&template_path, &out_path, Some("2.0.1")).unwrap());

        assert!(stamp(&template_path, &out_path, None).unwrap());
        assert_eq!(fs::read_to_string(&out_path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_stamp_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let result = stamp(
            &dir.path().join("missing.rs.in"),
            &dir.path().join("version.rs"),
            Some("1.0.0"),
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
