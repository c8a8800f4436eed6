//! Minimal hand-assembled little-endian TIFF fixtures for tests.
//! kamadak-exif sniffs container bytes, so these parse under any extension.

/// TIFF entry types
const ASCII: u16 = 2;
const LONG: u16 = 4;
const RATIONAL: u16 = 5;

fn entry(out: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: u32) {
    out.extend(tag.to_le_bytes());
    out.extend(kind.to_le_bytes());
    out.extend(count.to_le_bytes());
    out.extend(value.to_le_bytes());
}

/// Header plus an IFD0 whose single entry is a sub-IFD pointer to offset 26.
fn header_with_pointer(pointer_tag: u16) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend(b"II");
    out.extend(42u16.to_le_bytes());
    out.extend(8u32.to_le_bytes());

    // IFD0: 2 (count) + 12 (entry) + 4 (next) = 18 bytes, so the
    // pointed-to IFD starts at 8 + 18 = 26
    out.extend(1u16.to_le_bytes());
    entry(&mut out, pointer_tag, LONG, 1, 26);
    out.extend(0u32.to_le_bytes());
    out
}

/// A TIFF whose Exif IFD carries `DateTimeOriginal` with the given value.
pub fn tiff_with_datetime(datetime: &str) -> Vec<u8> {
    assert!(datetime.len() > 4, "value must not fit inline");
    let mut out = header_with_pointer(0x8769);

    // Exif IFD at 26, its 18 bytes put the string data at 44
    out.extend(1u16.to_le_bytes());
    entry(&mut out, 0x9003, ASCII, datetime.len() as u32 + 1, 44);
    out.extend(0u32.to_le_bytes());

    out.extend(datetime.as_bytes());
    out.push(0);
    out
}

/// A TIFF whose GPS IFD carries latitude/longitude DMS triples with
/// hemisphere references.
pub fn tiff_with_gps(lat: [u32; 3], lat_ref: u8, lon: [u32; 3], lon_ref: u8) -> Vec<u8> {
    let mut out = header_with_pointer(0x8825);

    // GPS IFD at 26: 2 + 4*12 + 4 = 54 bytes, so rational data starts at
    // 80 (latitude) and 104 (longitude); two-byte refs are stored inline
    out.extend(4u16.to_le_bytes());
    entry(&mut out, 1, ASCII, 2, u32::from_le_bytes([lat_ref, 0, 0, 0]));
    entry(&mut out, 2, RATIONAL, 3, 80);
    entry(&mut out, 3, ASCII, 2, u32::from_le_bytes([lon_ref, 0, 0, 0]));
    entry(&mut out, 4, RATIONAL, 3, 104);
    out.extend(0u32.to_le_bytes());

    for value in lat.iter().chain(lon.iter()) {
        out.extend(value.to_le_bytes());
        out.extend(1u32.to_le_bytes());
    }
    out
}
