use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions treated as images, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Recursively collect image files under `root`, in traversal order.
/// A missing root is the one fatal startup error of the whole run.
pub fn find_image_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("source directory does not exist: {}", root.display());
    }

    eprintln!("Scanning: {}", root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Warning: cannot access entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_image(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
