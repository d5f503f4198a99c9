//! `strobe list` — enumerate candidate modules.

use crate::pipeline::{discover_documents, module_stem, resolve_project_root};
use crate::GlobalArgs;

/// Runs the `strobe list` command: prints one module stem per line.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = strobe_config::load_config(&project_dir)?;

    let sources_dir = config.paths.sources_dir(&project_dir);
    let documents = discover_documents(&sources_dir)?;
    if documents.is_empty() {
        if !global.quiet {
            eprintln!("warning: no documents found in {}", sources_dir.display());
        }
        return Ok(0);
    }

    for path in &documents {
        println!("{}", module_stem(path));
    }
    Ok(0)
}
