//! Seed rendering for Ralph's progress log.

use std::path::Path;

use crate::extract::{project, roadmap};
use crate::ports::filesystem::FileSystem;
use crate::prd::Prd;

/// Renders the initial `progress.txt` content for an assembled PRD.
///
/// Pure rendering: the caller decides whether to write the result (the
/// log is only seeded when no log exists yet). The project context
/// section appears only when `PROJECT.md` exists, and the phase section
/// only when a phase filter was given.
///
/// # Errors
///
/// Returns an error if reading the roadmap fails.
pub fn render(
    fs: &dyn FileSystem,
    prd: &Prd,
    planning_dir: &Path,
    phase: Option<u32>,
) -> Result<String, String> {
    let mut lines = vec![
        "# Ralph Progress Log".to_string(),
        format!("# Branch: {}", prd.branch_name),
        "# Started: (pending)".to_string(),
        String::new(),
        "## Codebase Patterns".to_string(),
        String::new(),
        "(Patterns discovered during implementation will be added here)".to_string(),
        String::new(),
    ];

    if fs.exists(&planning_dir.join(project::PROJECT_FILE)) {
        lines.extend([
            "## GSD Project Context".to_string(),
            String::new(),
            format!("Project: {}", prd.project),
            format!("Description: {}", prd.description),
            String::new(),
        ]);
    }

    if let Some(n) = phase {
        let info = roadmap::load(fs, planning_dir, n)?;
        lines.extend([
            format!("## Phase {n}: {}", info.name),
            String::new(),
            "Success Criteria:".to_string(),
        ]);
        for criterion in &info.criteria {
            lines.push(format!("- {criterion}"));
        }
        lines.push(String::new());
    }

    lines.extend(["---".to_string(), String::new()]);

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::adapters::mem::MemFs;
    use crate::prd::Prd;
    use std::path::Path;

    fn sample_prd() -> Prd {
        Prd {
            project: "Demo".to_string(),
            branch_name: "ralph/demo".to_string(),
            description: "A demo.".to_string(),
            user_stories: Vec::new(),
        }
    }

    #[test]
    fn renders_header_and_patterns_section() {
        let fs = MemFs::new();
        let out = render(&fs, &sample_prd(), Path::new(".planning"), None).unwrap();
        assert!(out.starts_with("# Ralph Progress Log\n# Branch: ralph/demo\n# Started: (pending)\n"));
        assert!(out.contains("## Codebase Patterns"));
        assert!(out.ends_with("---\n"));
    }

    #[test]
    fn project_section_requires_project_file() {
        let fs = MemFs::new();
        let without = render(&fs, &sample_prd(), Path::new(".planning"), None).unwrap();
        assert!(!without.contains("## GSD Project Context"));

        fs.add(".planning/PROJECT.md", "# Demo\n\nA demo.\n");
        let with = render(&fs, &sample_prd(), Path::new(".planning"), None).unwrap();
        assert!(with.contains("## GSD Project Context"));
        assert!(with.contains("Project: Demo"));
        assert!(with.contains("Description: A demo."));
    }

    #[test]
    fn phase_section_lists_bulleted_criteria() {
        let fs = MemFs::new();
        fs.add(
            ".planning/ROADMAP.md",
            "### Phase 2: Features\n\nSuccess Criteria:\n1. Flags exist\n2. Docs updated\n",
        );
        let out = render(&fs, &sample_prd(), Path::new(".planning"), Some(2)).unwrap();
        assert!(out.contains("## Phase 2: Features"));
        assert!(out.contains("Success Criteria:\n- Flags exist\n- Docs updated"));
    }

    #[test]
    fn no_phase_section_without_filter() {
        let fs = MemFs::new();
        fs.add(".planning/ROADMAP.md", "### Phase 2: Features\n");
        let out = render(&fs, &sample_prd(), Path::new(".planning"), None).unwrap();
        assert!(!out.contains("## Phase"));
    }
}
