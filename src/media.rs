use std::path::PathBuf;

use chrono::NaiveDateTime;

/// Which step of the fallback chain produced a record's capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Exif,
    FilesystemDate,
    CurrentDateFallback,
}

/// Everything known about one discovered image after the analysis pass.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// Full path of the source file
    pub path: PathBuf,
    /// Resolved capture timestamp (local wall time, timezone-less)
    pub date: NaiveDateTime,
    /// Which fallback step produced the timestamp
    pub provenance: Provenance,
    /// Human-readable description of the date source, for log output only
    pub date_info: String,
    /// Decimal (latitude, longitude), when --gps is on and tags were present
    pub coords: Option<(f64, f64)>,
    /// First-level subfolder tag, pre-formatted `_<name>_`, when --dir is on
    pub subfolder: Option<String>,
}
