use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Field, In, Reader, Tag, Value};

/// Extract decimal GPS coordinates from a file's EXIF data.
///
/// Absent GPS tags yield `None` silently; unreadable files, malformed DMS
/// triples and out-of-range results yield `None` with a warning. GPS
/// problems never abort processing of the file.
pub fn extract_gps(path: &Path) -> Option<(f64, f64)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not read GPS data from {}: {}", path.display(), e);
            return None;
        }
    };
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return None,
        Err(e) => {
            eprintln!("Warning: could not read GPS data from {}: {}", path.display(), e);
            return None;
        }
    };

    let (lat_field, lon_field) = (
        exif.get_field(Tag::GPSLatitude, In::PRIMARY)?,
        exif.get_field(Tag::GPSLongitude, In::PRIMARY)?,
    );

    match convert(
        lat_field,
        exif.get_field(Tag::GPSLatitudeRef, In::PRIMARY),
        lon_field,
        exif.get_field(Tag::GPSLongitudeRef, In::PRIMARY),
    ) {
        Some((lat, lon)) if in_range(lat, lon) => Some((lat, lon)),
        Some((lat, lon)) => {
            eprintln!(
                "Warning: GPS coordinates out of range in {}: {lat},{lon}",
                path.display()
            );
            None
        }
        None => {
            eprintln!("Warning: malformed GPS data in {}", path.display());
            None
        }
    }
}

/// Convert DMS latitude/longitude fields to signed decimal degrees.
/// A missing hemisphere reference leaves the coordinate positive.
fn convert(
    lat: &Field,
    lat_ref: Option<&Field>,
    lon: &Field,
    lon_ref: Option<&Field>,
) -> Option<(f64, f64)> {
    let mut lat = dms_to_decimal(lat)?;
    let mut lon = dms_to_decimal(lon)?;

    if hemisphere(lat_ref) == Some('S') {
        lat = -lat;
    }
    if hemisphere(lon_ref) == Some('W') {
        lon = -lon;
    }

    Some((lat, lon))
}

/// `degrees + minutes/60 + seconds/3600`. DMS triples occur both as
/// RATIONAL and SRATIONAL values in the wild.
fn dms_to_decimal(field: &Field) -> Option<f64> {
    match &field.value {
        Value::Rational(parts) if parts.len() >= 3 => Some(
            parts[0].to_f64() + parts[1].to_f64() / 60.0 + parts[2].to_f64() / 3600.0,
        ),
        Value::SRational(parts) if parts.len() >= 3 => Some(
            parts[0].to_f64() + parts[1].to_f64() / 60.0 + parts[2].to_f64() / 3600.0,
        ),
        _ => None,
    }
}

fn hemisphere(field: Option<&Field>) -> Option<char> {
    match &field?.value {
        Value::Ascii(groups) => groups
            .first()
            .and_then(|g| g.first())
            .map(|&b| b as char),
        _ => None,
    }
}

fn in_range(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
