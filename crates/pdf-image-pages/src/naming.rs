//! Output file naming

use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

/// Name used when the user leaves the name field blank
pub const DEFAULT_NAME_FORMAT: &str = "images_%Y-%m-%d_%H-%M-%S";

/// File name for an export: the trimmed `base`, or a timestamp when blank,
/// with `.pdf` appended unless already present.
pub fn output_file_name<Tz>(base: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let base = base.trim();
    let stem = if base.is_empty() {
        now.format(DEFAULT_NAME_FORMAT).to_string()
    } else {
        base.replace(['/', '\\'], "_")
    };

    if stem.to_ascii_lowercase().ends_with(".pdf") {
        stem
    } else {
        format!("{stem}.pdf")
    }
}

pub fn output_path<Tz>(dir: impl AsRef<Path>, base: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dir.as_ref().join(output_file_name(base, now))
}
