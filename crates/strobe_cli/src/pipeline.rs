//! Shared helpers for the CLI commands: project-root resolution, document
//! discovery, and path derivation.

use std::path::{Path, PathBuf};

use strobe_config::ProjectConfig;

use crate::GlobalArgs;

/// Resolves the project root directory.
///
/// With `--config <path>`, the root is the file's parent directory (or the
/// path itself if it is a directory). Otherwise the root is the nearest
/// ancestor of the working directory containing a `strobe.toml`, falling
/// back to the working directory itself.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            return Ok(p
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")));
        }
        return Ok(p);
    }
    Ok(find_project_root(&std::env::current_dir()?))
}

/// Walks up from `start` looking for a directory containing `strobe.toml`.
fn find_project_root(start: &Path) -> PathBuf {
    let mut dir = start;
    loop {
        if dir.join("strobe.toml").is_file() {
            log::debug!("project root: {}", dir.display());
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return start.to_path_buf(),
        }
    }
}

/// Discovers candidate documents (`.vhdl` files) in a directory, sorted by
/// path. A missing directory yields an empty list.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("vhdl") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Resolves a `sim` file argument to a document path.
///
/// Tries: (1) an existing file path, (2) a module stem in the configured
/// sources directory (with or without the `.vhdl` extension).
pub fn resolve_document(
    arg: &str,
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = PathBuf::from(arg);
    if path.is_file() {
        return Ok(path);
    }

    let sources = config.paths.sources_dir(project_dir);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(arg);
    let candidate = sources.join(format!("{stem}.vhdl"));
    if candidate.is_file() {
        return Ok(candidate);
    }

    Err(format!(
        "document not found: {arg} (also tried {})",
        candidate.display()
    )
    .into())
}

/// The module stem of a document path, used for naming and path derivation.
pub fn module_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}
