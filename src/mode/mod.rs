//! Batch drivers

mod centroid;
mod trace;

pub use centroid::{DEFAULT_CENTROID_FOLDER, run_centroid};
pub use trace::run_trace;

use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Extension matched case-insensitively when scanning a folder
const MP3_EXTENSION: &str = "mp3";

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MP3_EXTENSION))
}

/// List regular `.mp3` files directly inside `folder`, sorted by name.
/// A missing folder or an empty listing is reported as an error.
pub(crate) fn list_mp3_files(folder: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !folder.exists() {
        return Err(BatchError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(BatchError::NotADirectory(folder.to_path_buf()));
    }

    let entries = std::fs::read_dir(folder).map_err(|source| BatchError::ReadDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_mp3(path))
        .collect();

    if files.is_empty() {
        return Err(BatchError::NoMp3Files(folder.to_path_buf()));
    }

    files.sort();
    Ok(files)
}
