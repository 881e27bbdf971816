//! Project name and description extraction from `PROJECT.md`.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ports::filesystem::FileSystem;

/// File name of the project overview document inside the planning directory.
pub const PROJECT_FILE: &str = "PROJECT.md";

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#\s+(?:Project:\s*)?(.+)$").expect("project name pattern"));

static DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^#.*?\n\n(.+?)(?:\n\n|$)").expect("project description pattern"));

/// Project identity derived from the project document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Project name from the leading heading.
    pub name: String,
    /// First paragraph following the heading.
    pub description: String,
}

impl ProjectInfo {
    /// Placeholder used when the project document is absent entirely.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            name: "Unnamed Project".to_string(),
            description: "No description available".to_string(),
        }
    }
}

/// Extracts project name and description from the document text.
///
/// The name comes from the first `#` heading, with an optional `Project:`
/// label stripped. The description is the first paragraph separated from
/// that heading by a blank line. Either falls back to a placeholder.
#[must_use]
pub fn info(content: &str) -> ProjectInfo {
    let name = NAME
        .captures(content)
        .map_or_else(|| "Unnamed Project".to_string(), |cap| cap[1].trim().to_string());

    let description = DESCRIPTION
        .captures(content)
        .map_or_else(|| "No description".to_string(), |cap| cap[1].trim().to_string());

    ProjectInfo { name, description }
}

/// Reads `PROJECT.md` under the planning directory.
///
/// An absent file yields [`ProjectInfo::missing`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load(fs: &dyn FileSystem, planning_dir: &Path) -> Result<ProjectInfo, String> {
    let path = planning_dir.join(PROJECT_FILE);
    if !fs.exists(&path) {
        return Ok(ProjectInfo::missing());
    }
    let content = fs
        .read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    Ok(info(&content))
}
