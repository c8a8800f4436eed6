use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};

/// Read the capture datetime from a file's EXIF data.
///
/// Returns `Ok(None)` when the file carries no EXIF segment, no
/// `DateTimeOriginal` tag, or an unparsable one; `Err` only when the file
/// cannot be opened or its container is corrupt. The raw tag string is
/// returned alongside the parsed value for log output.
pub fn extract_exif_datetime(path: &Path) -> anyhow::Result<Option<(NaiveDateTime, String)>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    let raw = field.display_value().to_string();
    let raw = raw.trim().trim_matches('"').to_string();
    Ok(parse_exif_datetime(&raw).map(|dt| (dt, raw)))
}

/// Parse the fixed EXIF datetime layout `YYYY:MM:DD HH:MM:SS`.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S").ok()
}
