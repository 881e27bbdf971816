//! Plan document discovery under the planning directory.

use std::path::{Path, PathBuf};

use crate::ports::filesystem::FileSystem;

/// Suffix identifying plan documents within a phase directory.
pub const PLAN_SUFFIX: &str = "PLAN.md";

/// Finds plan documents under `<planning_dir>/phases/`, optionally filtered
/// to one phase.
///
/// Phase directories are visited in name-sorted order and the plan files
/// within each are name-sorted too. The returned order is the authoritative
/// processing order for assembly: it decides tie-breaks between stories of
/// equal priority. A missing `phases/` directory yields an empty list.
///
/// # Errors
///
/// Returns an error if a directory listing fails.
pub fn find_plan_files(
    fs: &dyn FileSystem,
    planning_dir: &Path,
    phase: Option<u32>,
) -> Result<Vec<PathBuf>, String> {
    let phases_dir = planning_dir.join("phases");
    if !fs.exists(&phases_dir) {
        return Ok(Vec::new());
    }

    let mut dir_names = fs
        .list_dir(&phases_dir)
        .map_err(|e| format!("failed to list {}: {e}", phases_dir.display()))?;
    dir_names.sort();

    let mut plan_files = Vec::new();
    for name in dir_names {
        let dir = phases_dir.join(&name);
        if !fs.is_dir(&dir) {
            continue;
        }
        if let Some(wanted) = phase {
            if leading_number(&name) != Some(wanted) {
                continue;
            }
        }

        let mut file_names =
            fs.list_dir(&dir).map_err(|e| format!("failed to list {}: {e}", dir.display()))?;
        file_names.sort();
        for file_name in file_names {
            if file_name.ends_with(PLAN_SUFFIX) {
                plan_files.push(dir.join(file_name));
            }
        }
    }

    Ok(plan_files)
}

/// Parses the leading decimal token of a name, e.g. `01-foundation` -> 1.
pub(crate) fn leading_number(name: &str) -> Option<u32> {
    let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
