//! Phase name and success criteria extraction from `ROADMAP.md`.
//!
//! Roadmaps are free-form prose; both extractors here are heuristic and
//! fall back to defaults when the expected conventions are absent.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ports::filesystem::FileSystem;

/// File name of the roadmap document inside the planning directory.
pub const ROADMAP_FILE: &str = "ROADMAP.md";

static CRITERIA_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[\d\-\*\.]+\s*(.+)$").expect("criteria item pattern"));

/// A phase's display name and success criteria from the roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseInfo {
    /// Display name, e.g. "Foundation" from "### Phase 1: Foundation".
    pub name: String,
    /// Success criteria lines, markers stripped. Empty when the roadmap
    /// does not follow the expected conventions.
    pub criteria: Vec<String>,
}

/// Extracts a phase's name and success criteria from roadmap text.
#[must_use]
pub fn info(content: &str, phase: u32) -> PhaseInfo {
    let name = phase_name(content, phase).unwrap_or_else(|| format!("Phase {phase}"));
    let criteria = success_criteria(content, phase);
    PhaseInfo { name, criteria }
}

/// Reads `ROADMAP.md` under the planning directory.
///
/// An absent roadmap yields `"Phase N"` with no criteria.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load(fs: &dyn FileSystem, planning_dir: &Path, phase: u32) -> Result<PhaseInfo, String> {
    let path = planning_dir.join(ROADMAP_FILE);
    if !fs.exists(&path) {
        return Ok(PhaseInfo { name: format!("Phase {phase}"), criteria: Vec::new() });
    }
    let content = fs
        .read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    Ok(info(&content, phase))
}

/// Finds the `## Phase N: ...` (or `###`) heading and returns the remainder
/// of the line.
fn phase_name(content: &str, phase: u32) -> Option<String> {
    let re = Regex::new(&format!(r"###?\s+Phase\s+{phase}[:\s]+([^\n]+)")).ok()?;
    let cap = re.captures(content)?;
    Some(cap[1].trim().to_string())
}

/// Collects success criteria for the phase.
///
/// The region runs from the phase's "Success Criteria" label to the next
/// heading, the next `**Phase` bold label, or end of text. Within it,
/// every line starting with a numbering or bullet marker counts.
fn success_criteria(content: &str, phase: u32) -> Vec<String> {
    let Ok(re) = Regex::new(&format!(
        r"(?si)Phase\s+{phase}.*?Success Criteria.*?:\s*(.*?)(?:###|\*\*Phase|$)"
    )) else {
        return Vec::new();
    };
    let Some(cap) = re.captures(content) else {
        return Vec::new();
    };
    CRITERIA_ITEM
        .captures_iter(&cap[1])
        .map(|c| c[1].trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
