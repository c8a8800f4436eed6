pub mod exif;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::media::Provenance;

/// Outcome of date resolution for one file.
pub struct ResolvedDate {
    pub date: NaiveDateTime,
    pub provenance: Provenance,
    /// Descriptive source string, e.g. `EXIF: 2023:06:15 14:30:00`
    pub info: String,
}

/// Resolve a file's capture date using all methods in priority order:
/// EXIF `DateTimeOriginal`, then filesystem timestamps, then the current
/// wall clock. Never fails; failures of one step fall through to the next.
pub fn resolve_date(path: &Path) -> ResolvedDate {
    match exif::extract_exif_datetime(path) {
        Ok(Some((date, raw))) => {
            return ResolvedDate {
                date,
                provenance: Provenance::Exif,
                info: format!("EXIF: {raw}"),
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!(
                "Warning: could not read EXIF data from {}: {:#}",
                path.display(),
                e
            );
        }
    }

    match filesystem_date(path) {
        Ok(date) => {
            return ResolvedDate {
                date,
                provenance: Provenance::FilesystemDate,
                info: format!("Filesystem: {}", date.format("%Y-%m-%d %H:%M:%S")),
            }
        }
        Err(e) => {
            eprintln!(
                "Warning: could not read filesystem date for {}: {}",
                path.display(),
                e
            );
        }
    }

    let now = Local::now().naive_local();
    ResolvedDate {
        date: now,
        provenance: Provenance::CurrentDateFallback,
        info: format!("Current date: {}", now.format("%Y-%m-%d %H:%M:%S")),
    }
}

/// The earlier of creation time and modification time. Not every
/// platform/filesystem exposes a creation time; modification time alone is
/// used then.
fn filesystem_date(path: &Path) -> std::io::Result<NaiveDateTime> {
    let meta = fs::metadata(path)?;
    let modified = meta.modified()?;
    let earliest = match meta.created() {
        Ok(created) => created.min(modified),
        Err(_) => modified,
    };
    Ok(DateTime::<Local>::from(earliest).naive_local())
}
