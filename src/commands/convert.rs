//! The conversion command: planning documents in, Ralph artifacts out.

use std::path::Path;

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileSystem;
use crate::prd::assemble;
use crate::progress;

/// Relative path of the GSD planning directory.
pub const PLANNING_DIR: &str = ".planning";

/// Relative path of the Ralph output directory.
pub const RALPH_DIR: &str = "ralph";

/// Executes a conversion against the working directory's fixed paths.
///
/// # Errors
///
/// Returns an error string if the planning directory is missing, no plan
/// documents match, or an artifact cannot be written.
pub fn run(phase: Option<u32>) -> Result<(), String> {
    run_with(&LiveFileSystem, Path::new(PLANNING_DIR), Path::new(RALPH_DIR), phase)
}

/// Executes a conversion with explicit directories.
///
/// Writes `prd.json` (always overwritten) and seeds `progress.txt` only
/// when it does not already exist; an existing log is reported as skipped
/// and left untouched. `prd.json` is written only after assembly fully
/// succeeds, so a failed run leaves no partial output.
///
/// # Errors
///
/// Returns an error string on the same conditions as [`run`].
pub fn run_with(
    fs: &dyn FileSystem,
    planning_dir: &Path,
    out_dir: &Path,
    phase: Option<u32>,
) -> Result<(), String> {
    if !fs.exists(planning_dir) {
        return Err(format!(
            "{} directory not found\n\
             Run GSD planning commands first:\n  \
             /gsd:new-project\n  \
             /gsd:create-roadmap\n  \
             /gsd:plan-phase N",
            planning_dir.display()
        ));
    }

    let prd = assemble::assemble(fs, planning_dir, phase)?;

    let prd_path = out_dir.join("prd.json");
    let json =
        serde_json::to_string_pretty(&prd).map_err(|e| format!("failed to serialize PRD: {e}"))?;
    fs.write(&prd_path, &json)
        .map_err(|e| format!("failed to write {}: {e}", prd_path.display()))?;
    println!("Created: {}", prd_path.display());

    let progress_path = out_dir.join("progress.txt");
    if fs.exists(&progress_path) {
        println!("Skipped: {} (already exists)", progress_path.display());
    } else {
        let content = progress::render(fs, &prd, planning_dir, phase)?;
        fs.write(&progress_path, &content)
            .map_err(|e| format!("failed to write {}: {e}", progress_path.display()))?;
        println!("Created: {}", progress_path.display());
    }

    println!();
    println!("Converted {} tasks to user stories", prd.user_stories.len());
    println!("Project: {}", prd.project);
    println!("Branch: {}", prd.branch_name);
    println!();
    println!("Next steps:");
    println!("  1. Review {}", prd_path.display());
    println!("  2. Run: ./ralph/ralph.sh --auto");

    Ok(())
}
