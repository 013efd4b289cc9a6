//! Recursive mirroring of a source tree into a destination tree.
//!
//! The walk is sequential and depth-first. Each call frame owns its own
//! counters and folds sub-results in by value, so no state is shared across
//! the recursion. A single file's failure is logged and counted; only a
//! missing source root or an enumeration failure aborts the run.

use crate::clean::{clean_content, normalize_content};
use crate::rules::{is_recognized, FileCategory};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Outcome counters for one directory subtree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Recognized files cleaned and written to the destination.
    pub processed: u64,
    /// Files that hit a read, write, or copy error.
    pub failed: u64,
    /// Unrecognized files copied through byte-for-byte.
    pub skipped: u64,
}

impl RunResult {
    /// Fold a subtree's counters into this one.
    pub fn merge(&mut self, other: RunResult) {
        self.processed += other.processed;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// Create a directory and any missing parents; no-op if already present.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Clean a single recognized file and write the result to the destination.
///
/// Returns false on any read or write failure, after logging it; a single
/// file never aborts the run.
pub fn process_file(src_path: &Path, dist_path: &Path) -> bool {
    match try_process_file(src_path, dist_path) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Error processing {}: {:#}", src_path.display(), err);
            false
        }
    }
}

fn try_process_file(src_path: &Path, dist_path: &Path) -> Result<()> {
    // Lossy read: a recognized file with stray non-UTF-8 bytes still gets a
    // best-effort cleaning instead of counting as failed.
    let bytes = fs::read(src_path).context("failed to read source file")?;
    let content = String::from_utf8_lossy(&bytes);

    let category = FileCategory::from_path(src_path);
    let cleaned = normalize_content(&clean_content(&content, category));

    if let Some(parent) = dist_path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(dist_path, cleaned).context("failed to write destination file")?;

    Ok(())
}

/// Byte-for-byte copy for unrecognized files.
fn copy_file(src_path: &Path, dist_path: &Path) -> Result<()> {
    if let Some(parent) = dist_path.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(src_path, dist_path).context("failed to copy file")?;
    Ok(())
}

/// Mirror `src_dir` into `dist_dir`, cleaning files whose extension is in
/// `extensions` (dot-prefixed, lowercase) and copying everything else
/// unmodified. Existing destination files are overwritten.
///
/// Children are visited in whatever order the filesystem reports them; no
/// ordering is guaranteed or meaningful.
pub fn process_directory(
    src_dir: &Path,
    dist_dir: &Path,
    extensions: &[String],
) -> Result<RunResult> {
    if !src_dir.exists() {
        bail!("Source directory '{}' does not exist", src_dir.display());
    }

    ensure_dir(dist_dir)?;

    let mut results = RunResult::default();

    let entries = fs::read_dir(src_dir)
        .with_context(|| format!("Failed to read directory {}", src_dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read an entry in {}", src_dir.display()))?;
        let src_path = entry.path();
        let dist_path = dist_dir.join(entry.file_name());

        // fs::metadata follows symlinks: a symlinked directory is recursed
        // and a symlinked file goes through the usual branches. A dangling
        // symlink fails the stat and aborts the run.
        let metadata = fs::metadata(&src_path)
            .with_context(|| format!("Failed to stat {}", src_path.display()))?;

        if metadata.is_dir() {
            results.merge(process_directory(&src_path, &dist_path, extensions)?);
        } else if is_recognized(&src_path, extensions) {
            if process_file(&src_path, &dist_path) {
                results.processed += 1;
            } else {
                results.failed += 1;
            }
        } else {
            match copy_file(&src_path, &dist_path) {
                Ok(()) => results.skipped += 1,
                Err(err) => {
                    eprintln!("Error copying {}: {:#}", src_path.display(), err);
                    results.failed += 1;
                }
            }
        }
    }

    Ok(results)
}
