//! Ralph PRD data model and assembly.
//!
//! Field names and nesting mirror the `prd.json` format Ralph consumes,
//! so the serialized output is camelCase.

pub mod assemble;
pub mod story;

use serde::{Deserialize, Serialize};

/// One normalized work item ("user story") in the generated PRD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    /// Unique id encoding phase, plan, and sequence, e.g. `US-0102-03`.
    pub id: String,
    /// Short task title.
    pub title: String,
    /// Dense 1-based execution rank after assembly.
    pub priority: u32,
    /// What to do, plus an optional `Files:` line.
    pub description: String,
    /// Ordered criteria: done-condition, plan truths, artifact checks.
    pub acceptance_criteria: Vec<String>,
    /// Shell commands proving the story works.
    #[serde(default)]
    pub tests: Vec<String>,
    /// Whether the story has passed; always starts false.
    #[serde(default)]
    pub passes: bool,
    /// Whether the story is blocked; always starts false.
    #[serde(default)]
    pub blocked: bool,
    /// Why the story is blocked, if it is.
    #[serde(default)]
    pub blocked_reason: String,
    /// Free-form notes left by the executor.
    #[serde(default)]
    pub notes: String,
}

/// The generated PRD: one conversion run's sole structured output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Prd {
    /// Project title, including phase naming when a filter was given.
    pub project: String,
    /// Git branch Ralph should work on.
    pub branch_name: String,
    /// Project description from the project document.
    pub description: String,
    /// Stories in final sorted, renumbered order.
    pub user_stories: Vec<UserStory>,
}
