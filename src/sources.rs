//! Framework-side discovery of compilation units.
//!
//! Registration only records (target, directory) pairs; this module is the
//! downstream half that walks a registered directory and lists the units
//! the framework would compile. Missing directories error here, not at
//! registration time.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions the framework compiles.
const SOURCE_EXTENSIONS: &[&str] = &["c", "cpp", "cc", "S", "s"];

/// List the compilation units under a registered source directory.
///
/// Walks recursively, in stable filename order.
pub fn collect_units(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut units = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("walking source directory {}", dir.display()))?;
        if entry.file_type().is_file() && is_source(entry.path()) {
            units.push(entry.into_path());
        }
    }
    Ok(units)
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
