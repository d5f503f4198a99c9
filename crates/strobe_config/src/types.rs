//! Configuration types deserialized from `strobe.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The top-level project configuration parsed from `strobe.toml`.
///
/// Every section and field is optional; a missing `strobe.toml` is
/// equivalent to an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata (name, description).
    #[serde(default)]
    pub project: ProjectMeta,
    /// Directory and file-name conventions.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional project metadata.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    #[serde(default)]
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// Directory and file-name conventions for a Strobe project.
///
/// Defaults reproduce the classic layout: documents in `sources/`, vector
/// files named `<stem>_tests.json` in `tests/`, and one cumulative report
/// at `reports/simulation_output.txt`.
#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Directory of candidate HDL documents.
    #[serde(default = "default_sources")]
    pub sources: String,
    /// Directory of test-vector files.
    #[serde(default = "default_tests")]
    pub tests: String,
    /// Directory the report file lives in.
    #[serde(default = "default_reports")]
    pub reports: String,
    /// File name of the cumulative report inside the reports directory.
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_sources() -> String {
    "sources".to_string()
}

fn default_tests() -> String {
    "tests".to_string()
}

fn default_reports() -> String {
    "reports".to_string()
}

fn default_report_file() -> String {
    "simulation_output.txt".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            tests: default_tests(),
            reports: default_reports(),
            report_file: default_report_file(),
        }
    }
}

impl PathsConfig {
    /// Resolves the sources directory against a project root.
    pub fn sources_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.sources)
    }

    /// Resolves the vector file for a document stem: `<tests>/<stem>_tests.json`.
    pub fn vectors_for(&self, root: &Path, stem: &str) -> PathBuf {
        root.join(&self.tests).join(format!("{stem}_tests.json"))
    }

    /// Resolves the cumulative report file path.
    pub fn report_path(&self, root: &Path) -> PathBuf {
        root.join(&self.reports).join(&self.report_file)
    }
}
