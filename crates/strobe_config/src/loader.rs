//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads a `strobe.toml` configuration from a project directory.
///
/// A missing file is not an error; all conventions fall back to their
/// defaults so projects without a `strobe.toml` keep the classic layout.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("strobe.toml");
    if !config_path.is_file() {
        return Ok(ProjectConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.paths.sources, "sources");
        assert_eq!(config.project.name, "");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "gates"
description = "combinational gate library"

[paths]
sources = "rtl"
tests = "vectors"
reports = "out"
report_file = "sim.txt"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "gates");
        assert_eq!(config.paths.sources, "rtl");
        assert_eq!(config.paths.tests, "vectors");
        assert_eq!(config.paths.reports, "out");
        assert_eq!(config.paths.report_file, "sim.txt");
    }

    #[test]
    fn parse_partial_paths() {
        let config = load_config_from_str("[paths]\nreports = \"out\"\n").unwrap();
        assert_eq!(config.paths.reports, "out");
        assert_eq!(config.paths.sources, "sources");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = load_config_from_str("[paths\nsources = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.paths.report_file, "simulation_output.txt");
    }

    #[test]
    fn load_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("strobe.toml"), "[project]\nname = \"t\"\n").unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.project.name, "t");
    }
}
