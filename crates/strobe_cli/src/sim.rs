//! `strobe sim` — simulate a single document.
//!
//! Resolves the document, derives the vector and report paths by convention
//! (overridable), runs the engine once, and prints the summary plus a
//! completion message naming the report path.

use std::path::PathBuf;

use crate::pipeline::{module_stem, resolve_document, resolve_project_root};
use crate::{GlobalArgs, SimArgs};

/// Runs the `strobe sim` command.
///
/// Exits non-zero only when the run itself aborts (extraction or
/// vector-load failure); failing vectors are reported, not fatal.
pub fn run(args: &SimArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = strobe_config::load_config(&project_dir)?;

    let document_path = resolve_document(&args.file, &project_dir, &config)?;
    let stem = module_stem(&document_path);

    let vectors_path = match &args.tests {
        Some(p) => PathBuf::from(p),
        None => config.paths.vectors_for(&project_dir, &stem),
    };
    let report_path = match &args.report {
        Some(p) => PathBuf::from(p),
        None => config.paths.report_path(&project_dir),
    };
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !global.quiet {
        eprintln!("   Simulating {stem}");
    }

    let summary = strobe_runner::run(&document_path, &vectors_path, &report_path)?;

    println!("{summary}");
    println!(
        "Simulation complete. Results saved to {}",
        summary.report_path.display()
    );
    Ok(0)
}
