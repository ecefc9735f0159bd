use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::FrameFormat;
use crate::{FrameError, Result};

/// Build output and hidden directories (`.git`, `.cargo`, ...) hold
/// JSON/TOML files that are not frames.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "target"
}

/// Manifests and CLI config that share the frame file extensions.
const NON_FRAME_FILES: [&str; 2] = ["Cargo.toml", crate::config::DEFAULT_CONFIG_FILE];

/// Discover frame files under `root`.
///
/// Walks the directory tree and keeps `.json`, `.toml`, `.yaml` and `.yml`
/// files, sorted by path. Hidden directories and `target/` are not entered,
/// and `Cargo.toml` / `framecheck.toml` are left out.
/// A `root` that is itself a supported file is returned on its own; any
/// other file is rejected.
pub fn discover_frame_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(FrameError::InvalidInput(format!(
            "path does not exist: {}",
            root.display()
        )));
    }

    if root.is_file() {
        if FrameFormat::from_path(root).is_none() {
            return Err(FrameError::InvalidInput(format!(
                "not a frame file (expected .json, .toml, .yaml or .yml): {}",
                root.display()
            )));
        }
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if FrameFormat::from_path(path).is_none() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if NON_FRAME_FILES.contains(&&*file_name) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    log::info!("Discovered {} frame files in {}", files.len(), root.display());
    Ok(files)
}
