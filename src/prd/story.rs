//! Story synthesis: one task record plus its plan context becomes one story.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

use super::UserStory;
use crate::discover::leading_number;
use crate::extract::tasks::TaskRecord;

static TITLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Task\s+\d+:\s*").expect("title prefix pattern"));

static VERIFY_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*&&\s*|\s*;\s*").expect("verify separator pattern"));

/// Plan-level hints merged into every story's acceptance criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MustHaves {
    /// Statements that must hold once the plan is done.
    pub truths: Vec<String>,
    /// Paths that must exist once the plan is done.
    pub artifacts: Vec<String>,
}

/// Per-plan context parsed once from a plan document's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanContext {
    /// Phase number, from the leading digits of the `phase` key.
    pub phase: u32,
    /// Plan number within the phase.
    pub plan: u32,
    /// Wave grouping; becomes the pre-sort priority of every story.
    pub wave: u32,
    /// Plan-level must-have hints.
    pub must_haves: MustHaves,
}

impl PlanContext {
    /// Builds a context from a frontmatter mapping.
    ///
    /// Missing or ill-typed keys resolve to defaults: phase 1, plan 1,
    /// wave 1, empty must-haves.
    #[must_use]
    pub fn from_frontmatter(meta: &Value) -> Self {
        let phase = meta.get("phase").map_or(1, phase_number);
        let plan = small_int(meta.get("plan"));
        let wave = small_int(meta.get("wave"));

        let must = meta.get("must_haves");
        let must_haves = MustHaves {
            truths: string_list(must.and_then(|m| m.get("truths"))),
            artifacts: string_list(must.and_then(|m| m.get("artifacts"))),
        };

        Self { phase, plan, wave, must_haves }
    }
}

/// Builds one [`UserStory`] from a task record and its plan context.
///
/// `seq` is the task's 1-based position within its plan. Every missing
/// optional field produces a documented default; synthesis never fails.
#[must_use]
pub fn synthesize(task: &TaskRecord, seq: u32, ctx: &PlanContext) -> UserStory {
    let id = format!("US-{:02}{:02}-{:02}", ctx.phase, ctx.plan, seq);

    let title = task
        .name
        .as_deref()
        .map_or_else(|| "Unnamed Task".to_string(), |name| TITLE_PREFIX.replace(name, "").to_string());

    let mut description = task.action.clone().unwrap_or_default();
    if let Some(files) = &task.files {
        description.push_str("\n\nFiles: ");
        description.push_str(files);
    }
    let description = description.trim().to_string();

    let mut acceptance_criteria = Vec::new();
    if let Some(done) = &task.done {
        acceptance_criteria.push(done.clone());
    }
    acceptance_criteria.extend(ctx.must_haves.truths.iter().cloned());
    acceptance_criteria.extend(ctx.must_haves.artifacts.iter().map(|a| format!("File exists: {a}")));

    let tests = task.verify.as_deref().map_or_else(Vec::new, split_verify);

    UserStory {
        id,
        title,
        priority: ctx.wave,
        description,
        acceptance_criteria,
        tests,
        passes: false,
        blocked: false,
        blocked_reason: String::new(),
        notes: String::new(),
    }
}

/// Splits a verify command line on `&&` or `;`, dropping empty fragments.
fn split_verify(verify: &str) -> Vec<String> {
    VERIFY_SEPARATOR
        .split(verify)
        .map(str::trim)
        .filter(|cmd| !cmd.is_empty())
        .map(str::to_string)
        .collect()
}

/// Phase number from a frontmatter value: leading digits of a string like
/// `01-foundation`, or a bare integer. Default 1.
fn phase_number(value: &Value) -> u32 {
    match value {
        Value::String(s) => leading_number(s).unwrap_or(1),
        _ => value.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(1),
    }
}

fn small_int(value: Option<&Value>) -> u32 {
    value.and_then(Value::as_u64).and_then(|n| u32::try_from(n).ok()).unwrap_or(1)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value.and_then(Value::as_sequence).map_or_else(Vec::new, |seq| {
        seq.iter().filter_map(Value::as_str).map(str::to_string).collect()
    })
}
