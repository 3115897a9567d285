//! Parser for the per-project `project.txt` metadata file.
//!
//! The format is one `key: value` pair per line. Keys are matched
//! case-insensitively against a fixed set; unknown keys and lines without a
//! colon are ignored. A repeated key overwrites the earlier value. Values are
//! single-line only: there is no escaping, so a value can never contain a
//! newline, but it may contain further colons. The renderer collapses any
//! line break inside a value to a single space so its output always parses
//! back to the same keys.

use std::fmt::Write;

use crate::project::ProjectMetadata;

/// File name looked up inside every project folder.
pub const METADATA_FILE_NAME: &str = "project.txt";

// ── Recognised keys (lowercase) ──────────────────────────────────────

pub const KEY_PROJECT_NAME: &str = "project name";
pub const KEY_OWNER: &str = "owner";
pub const KEY_ADDRESS: &str = "address";
pub const KEY_REVIEW: &str = "review";

/// Parse the full text of a metadata file into a partial record.
///
/// Never fails: empty input yields an all-`None` record.
pub fn parse_metadata(content: &str) -> ProjectMetadata {
    let mut meta = ProjectMetadata::default();

    for line in content.split('\n') {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim().to_string();

        match key.as_str() {
            KEY_PROJECT_NAME => meta.name = Some(value),
            KEY_OWNER => meta.owner = Some(value),
            KEY_ADDRESS => meta.address = Some(value),
            KEY_REVIEW => meta.review = Some(value),
            _ => {}
        }
    }

    meta
}

/// Render a partial record back into metadata file text.
///
/// Only present fields are written, one per line, in a fixed order. Values
/// are flattened with [`single_line`].
pub fn render_metadata(meta: &ProjectMetadata) -> String {
    let fields = [
        ("Project Name", &meta.name),
        ("Owner", &meta.owner),
        ("Address", &meta.address),
        ("Review", &meta.review),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        if let Some(value) = value {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{label}: {}", single_line(value));
        }
    }
    out
}

/// Collapse every run of line breaks (and the whitespace around them) into
/// one space, then trim. A value without line breaks is only trimmed.
pub fn single_line(value: &str) -> String {
    value
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
