//! `strobe report` — print the cumulative report.

use crate::pipeline::resolve_project_root;
use crate::GlobalArgs;

/// Runs the `strobe report` command: prints the report file to stdout.
///
/// Returns exit code 1 if no report exists yet.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = strobe_config::load_config(&project_dir)?;

    let report_path = config.paths.report_path(&project_dir);
    if !report_path.is_file() {
        if !global.quiet {
            eprintln!("no report found at {}", report_path.display());
        }
        return Ok(1);
    }

    print!("{}", std::fs::read_to_string(&report_path)?);
    Ok(0)
}
