use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Everything outside `[A-Za-z0-9_\-.]` (unicode word chars included) gets
/// replaced with an underscore in the original stem.
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\-.]").unwrap());

/// Build the destination filename. Fixed part order, underscore-joined:
/// timestamp, optional subfolder tag, sanitized stem, optional coordinate
/// pair, then the lower-cased original extension.
pub fn compose_filename(
    original: &Path,
    date: NaiveDateTime,
    subfolder: Option<&str>,
    coords: Option<(f64, f64)>,
) -> String {
    let stem = original.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let extension = original
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    let mut parts = vec![date.format("%Y%m%d_%H%M%S").to_string()];
    if let Some(tag) = subfolder {
        parts.push(tag.to_string());
    }
    parts.push(UNSAFE_CHARS.replace_all(stem, "_").into_owned());
    if let Some((lat, lon)) = coords {
        parts.push(format!("_{lat:.6},{lon:.6}_"));
    }

    match extension {
        Some(ext) => format!("{}.{}", parts.join("_"), ext),
        None => parts.join("_"),
    }
}

/// First path segment of `path` relative to `root`, formatted `_<name>_`.
/// Files directly in the root (or outside it) yield no tag.
pub fn subfolder_tag(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut components = rel.components();
    let first = components.next()?;
    // no second component means `first` is the filename itself
    components.next()?;
    Some(format!("_{}_", first.as_os_str().to_string_lossy()))
}

/// Probe `dest_dir` for `base`; while taken, insert `_<n>` (n = 1, 2, ...)
/// immediately before the extension until a free name is found.
pub fn unique_filename(dest_dir: &Path, base: &str) -> String {
    if !dest_dir.join(base).exists() {
        return base.to_string();
    }

    let (stem, ext) = split_extension(base);
    let mut counter = 1u32;
    loop {
        let candidate = format!("{stem}_{counter}{ext}");
        if !dest_dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Split at the last dot; the extension part keeps its leading dot.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) => name.split_at(pos),
        None => (name, ""),
    }
}
