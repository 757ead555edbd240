// src/discovery.rs
//! Finds locale snapshot files to check.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::error::Result;

const SNAPSHOT_EXT: &str = "json";

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// Returns `input` itself if it is a file, otherwise every `*.json` below it,
/// sorted.
///
/// # Errors
/// Returns error if `input` does not exist.
pub fn discover(input: &Path, reference: Option<&Path>) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    // Surface a missing input as an I/O error on the input path.
    std::fs::metadata(input).map_err(|source| crate::error::CheckError::Io {
        source,
        path: input.to_path_buf(),
    })?;

    let walker = WalkDir::new(input)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let (mut paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        warn!("Encountered {error_count} errors during file walk");
    }
    if let Some(reference) = reference {
        paths.retain(|p| !same_file(p, reference));
    }
    paths.sort();
    Ok(paths)
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_snapshot(entry.path()) {
                    paths.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SNAPSHOT_EXT)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
