//! Shared filesystem helpers for build orchestration.

use std::{
    fs::{copy, create_dir_all},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;

/// Find files matching a glob pattern in a directory.
///
/// A directory that does not exist yields no matches rather than an error.
pub fn glob_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(pattern);
    let pattern_str = pattern.to_str().context("Invalid pattern path")?;
    Ok(glob(pattern_str)
        .with_context(|| format!("Failed to glob pattern: {pattern_str}"))?
        .filter_map(Result::ok)
        .collect())
}

/// Copy files into `dest` keeping their filenames, overwriting existing ones.
pub fn copy_into(files: &[PathBuf], dest: &Path) -> Result<()> {
    for file in files {
        let file_name = file
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid filename: {}", file.display()))?;
        copy(file, dest.join(file_name))
            .with_context(|| format!("Failed to copy {} to {}", file.display(), dest.display()))?;
    }
    Ok(())
}

/// Create a directory (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))
}
