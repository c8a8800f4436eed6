use std::fs;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::media::ImageRecord;
use crate::namer;
use crate::stats::Statistics;

/// One row of the GPS side-table, collected per copied file that carried
/// coordinates.
pub struct GpsLogEntry {
    pub filename: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: String,
}

/// Copy records into `dest_dir` in the given (chronological) order, each
/// under its composed, collision-free name. Copy failures are counted and
/// reported; the batch always continues.
pub fn copy_images(
    records: &[ImageRecord],
    dest_dir: &Path,
    stats: &mut Statistics,
) -> anyhow::Result<Vec<GpsLogEntry>> {
    fs::create_dir_all(dest_dir)?;

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} copying images")
            .unwrap(),
    );

    let mut gps_log = Vec::new();
    for record in records {
        match copy_one(record, dest_dir) {
            Ok(filename) => {
                if let Some((lat, lon)) = record.coords {
                    gps_log.push(GpsLogEntry {
                        filename: filename.clone(),
                        latitude: lat,
                        longitude: lon,
                        date: record.date.format("%Y-%m-%d %H:%M:%S").to_string(),
                    });
                }
                let source_name = record
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| record.path.display().to_string());
                pb.println(format!(
                    "Copied: {} -> {} ({})",
                    source_name,
                    filename,
                    describe(record)
                ));
                stats.copied_files += 1;
            }
            Err(e) => {
                eprintln!("Warning: failed to copy {}: {:#}", record.path.display(), e);
                stats.error_files += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(gps_log)
}

fn copy_one(record: &ImageRecord, dest_dir: &Path) -> anyhow::Result<String> {
    let base = namer::compose_filename(
        &record.path,
        record.date,
        record.subfolder.as_deref(),
        record.coords,
    );
    let filename = namer::unique_filename(dest_dir, &base);
    let dest = dest_dir.join(&filename);

    fs::copy(&record.path, &dest)?;
    copy_file_times(&record.path, &dest);

    Ok(filename)
}

/// Carry the source's access/modification times onto the copy, best effort.
fn copy_file_times(src: &Path, dest: &Path) {
    if let Ok(meta) = fs::metadata(src) {
        let atime = filetime::FileTime::from_last_access_time(&meta);
        let mtime = filetime::FileTime::from_last_modification_time(&meta);
        let _ = filetime::set_file_times(dest, atime, mtime);
    }
}

/// Info suffix of the per-file copy line: date source, then GPS and folder
/// when present.
fn describe(record: &ImageRecord) -> String {
    let mut parts = vec![record.date_info.clone()];
    if let Some((lat, lon)) = record.coords {
        parts.push(format!("GPS: {lat:.6},{lon:.6}"));
    }
    if let Some(tag) = &record.subfolder {
        parts.push(format!("Folder: {}", tag.trim_matches('_')));
    }
    parts.join(" | ")
}

/// Write `gps_positions.csv` into `dest_dir`, one row per entry. Writes
/// nothing when no coordinates were collected.
pub fn write_gps_csv(dest_dir: &Path, entries: &[GpsLogEntry]) -> anyhow::Result<()> {
    if entries.is_empty() {
        println!("No GPS data found - gps_positions.csv not created.");
        return Ok(());
    }

    let path = dest_dir.join("gps_positions.csv");
    let mut out = String::from("Name,Latitude,Longitude,Description\n");
    for entry in entries {
        out.push_str(&format!(
            "{},{:.6},{:.6},{}\n",
            csv_field(&entry.filename),
            entry.latitude,
            entry.longitude,
            csv_field(&format!("Photo taken on {}", entry.date)),
        ));
    }
    fs::write(&path, out)?;

    println!(
        "GPS positions written to {} ({} entries)",
        path.display(),
        entries.len()
    );
    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Provenance;
    use chrono::NaiveDateTime;
    use std::path::PathBuf;

    fn record(path: PathBuf, date: &str, coords: Option<(f64, f64)>) -> ImageRecord {
        ImageRecord {
            path,
            date: NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
            provenance: Provenance::FilesystemDate,
            date_info: format!("Filesystem: {date}"),
            coords,
            subfolder: None,
        }
    }

    #[test]
    fn copies_and_renames_into_destination() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let src_path = source.path().join("photo.jpg");
        fs::write(&src_path, b"payload").unwrap();

        let records = vec![record(src_path, "2023-01-01 12:00:00", None)];
        let mut stats = Statistics::default();
        let gps_log = copy_images(&records, dest.path(), &mut stats).unwrap();

        assert!(gps_log.is_empty());
        assert_eq!(stats.copied_files, 1);
        assert_eq!(stats.error_files, 0);
        let copied = dest.path().join("20230101_120000_photo.jpg");
        assert_eq!(fs::read(copied).unwrap(), b"payload");
    }

    #[test]
    fn colliding_names_get_numeric_suffixes() {
        let source = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir(source.path().join("a")).unwrap();
        fs::create_dir(source.path().join("b")).unwrap();
        let first = source.path().join("a").join("photo.jpg");
        let second = source.path().join("b").join("photo.jpg");
        fs::write(&first, b"one").unwrap();
        fs::write(&second, b"two").unwrap();

        let records = vec![
            record(first, "2023-01-01 12:00:00", None),
            record(second, "2023-01-01 12:00:00", None),
        ];
        let mut stats = Statistics::default();
        copy_images(&records, dest.path(), &mut stats).unwrap();

        assert_eq!(
            fs::read(dest.path().join("20230101_120000_photo.jpg")).unwrap(),
            b"one"
        );
        assert_eq!(
            fs::read(dest.path().join("20230101_120000_photo_1.jpg")).unwrap(),
            b"two"
        );
    }

    #[test]
    fn missing_source_is_counted_not_fatal() {
        let dest = tempfile::tempdir().unwrap();
        let records = vec![record(
            PathBuf::from("/nonexistent/gone.jpg"),
            "2023-01-01 12:00:00",
            None,
        )];
        let mut stats = Statistics::default();
        copy_images(&records, dest.path(), &mut stats).unwrap();

        assert_eq!(stats.copied_files, 0);
        assert_eq!(stats.error_files, 1);
    }

    #[test]
    fn gps_csv_contains_one_quoted_row_per_entry() {
        let dest = tempfile::tempdir().unwrap();
        let entries = vec![GpsLogEntry {
            filename: "20230101_120000_p__40.446111,-79.982222_.jpg".to_string(),
            latitude: 40.446111,
            longitude: -79.982222,
            date: "2023-01-01 12:00:00".to_string(),
        }];
        write_gps_csv(dest.path(), &entries).unwrap();

        let csv = fs::read_to_string(dest.path().join("gps_positions.csv")).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Latitude,Longitude,Description"));
        assert_eq!(
            lines.next(),
            Some(
                "\"20230101_120000_p__40.446111,-79.982222_.jpg\",40.446111,-79.982222,\
                 Photo taken on 2023-01-01 12:00:00"
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_gps_log_writes_no_csv() {
        let dest = tempfile::tempdir().unwrap();
        write_gps_csv(dest.path(), &[]).unwrap();
        assert!(!dest.path().join("gps_positions.csv").exists());
    }
}
