//! Project configuration loaded from `strobe.toml`.
//!
//! A Strobe project is a directory holding HDL documents, vector files, and
//! a cumulative report, laid out under conventional subdirectories. The
//! optional `strobe.toml` at the project root overrides those conventions;
//! in its absence every field falls back to the original fixed layout
//! (`sources/`, `tests/`, `reports/simulation_output.txt`).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{PathsConfig, ProjectConfig, ProjectMeta};
