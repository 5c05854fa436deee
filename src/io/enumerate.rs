//! Enumeration collaborator: lists candidate source images in a directory.
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Regular files directly inside `input_dir` whose extension matches one of
/// `extensions` (case-insensitive), sorted by path. Subdirectories are ignored.
pub fn list_source_images(input_dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_matching_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}
