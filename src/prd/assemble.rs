//! PRD assembly: discovery, per-plan conversion, ordering, and naming.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::story::{self, PlanContext};
use super::{Prd, UserStory};
use crate::discover;
use crate::extract::{frontmatter, project, roadmap, tasks};
use crate::ports::filesystem::FileSystem;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-z0-9]+").expect("slug pattern"));

/// Lowercase-hyphenated identifier derived from free text.
///
/// Runs of characters outside `[a-z0-9]` collapse to a single hyphen and
/// edge hyphens are stripped, so the result is idempotent.
#[must_use]
pub fn slug(text: &str) -> String {
    NON_SLUG.replace_all(&text.to_lowercase(), "-").trim_matches('-').to_string()
}

/// Assembles one PRD from the planning directory.
///
/// Plans are processed in discovery order; each plan's tasks become
/// stories with a per-plan 1-based sequence. The concatenated stories are
/// stable-sorted by `(priority, id)` — priority being the originating
/// wave — then priorities are overwritten with their dense 1-based rank.
///
/// # Errors
///
/// Returns an error when no plan documents match the requested scope (the
/// only fatal pipeline condition besides I/O failures), or when a read
/// fails.
pub fn assemble(
    fs: &dyn FileSystem,
    planning_dir: &Path,
    phase: Option<u32>,
) -> Result<Prd, String> {
    let project = project::load(fs, planning_dir)?;

    let plan_files = discover::find_plan_files(fs, planning_dir, phase)?;
    if plan_files.is_empty() {
        return Err(no_plans_message(planning_dir, phase));
    }

    let mut stories = Vec::new();
    for path in &plan_files {
        let content = fs
            .read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        stories.extend(convert_plan(&content));
    }

    stories.sort_by(|a, b| (a.priority, &a.id).cmp(&(b.priority, &b.id)));
    for (rank, story) in (1..).zip(stories.iter_mut()) {
        story.priority = rank;
    }

    let (title, branch_name) = match phase {
        Some(n) => {
            let phase_info = roadmap::load(fs, planning_dir, n)?;
            (
                format!("{} (Phase {n}: {})", project.name, phase_info.name),
                format!("ralph/phase-{n:02}-{}", slug(&phase_info.name)),
            )
        }
        None => (project.name.clone(), format!("ralph/{}", slug(&project.name))),
    };

    Ok(Prd {
        project: title,
        branch_name,
        description: project.description,
        user_stories: stories,
    })
}

/// Converts a single plan document into stories, in extraction order.
fn convert_plan(content: &str) -> Vec<UserStory> {
    let (meta, body) = frontmatter::parse(content);
    let ctx = PlanContext::from_frontmatter(&meta);
    tasks::extract(&body)
        .iter()
        .zip(1..)
        .map(|(task, seq)| story::synthesize(task, seq, &ctx))
        .collect()
}

fn no_plans_message(planning_dir: &Path, phase: Option<u32>) -> String {
    match phase {
        Some(n) => {
            format!("no *PLAN.md files found for phase {n} under {}", planning_dir.display())
        }
        None => format!("no *PLAN.md files found under {}", planning_dir.display()),
    }
}
