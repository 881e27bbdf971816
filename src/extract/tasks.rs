//! Task block extraction from plan document bodies.
//!
//! Plans embed tasks as XML-style blocks:
//!
//! ```text
//! <task type="code">
//!   <name>Task 1: Build the widget</name>
//!   <action>Implement the widget module</action>
//!   <verify>cargo test</verify>
//!   <done>Widget renders</done>
//! </task>
//! ```
//!
//! This is a best-effort scanner over loose markup, not an XML parser.
//! Unmatched or malformed tags are skipped silently.

use once_cell::sync::Lazy;
use regex::Regex;

static TASK_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<task[^>]*type="([^"]*)"[^>]*>(.*?)</task>"#).expect("task block pattern")
});

static NAME_TAG: Lazy<Regex> = Lazy::new(|| tag_pattern("name"));
static FILES_TAG: Lazy<Regex> = Lazy::new(|| tag_pattern("files"));
static ACTION_TAG: Lazy<Regex> = Lazy::new(|| tag_pattern("action"));
static VERIFY_TAG: Lazy<Regex> = Lazy::new(|| tag_pattern("verify"));
static DONE_TAG: Lazy<Regex> = Lazy::new(|| tag_pattern("done"));

fn tag_pattern(tag: &str) -> Regex {
    Regex::new(&format!("(?s)<{tag}>(.*?)</{tag}>")).expect("sub-element pattern")
}

/// One task extracted from a plan body.
///
/// Every field except `task_type` is optional; absence means the plan
/// author did not specify it, never that extraction failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRecord {
    /// Value of the `type` attribute on the task block.
    pub task_type: String,
    /// Human-readable task name.
    pub name: Option<String>,
    /// Files the task touches.
    pub files: Option<String>,
    /// What to do.
    pub action: Option<String>,
    /// Shell command(s) proving the task works.
    pub verify: Option<String>,
    /// Completion criterion.
    pub done: Option<String>,
}

/// Extracts every task block from a plan body, in document order.
#[must_use]
pub fn extract(body: &str) -> Vec<TaskRecord> {
    TASK_BLOCK
        .captures_iter(body)
        .map(|cap| {
            let inner = cap.get(2).map_or("", |m| m.as_str());
            TaskRecord {
                task_type: cap.get(1).map_or("", |m| m.as_str()).to_string(),
                name: tag_content(inner, &NAME_TAG),
                files: tag_content(inner, &FILES_TAG),
                action: tag_content(inner, &ACTION_TAG),
                verify: tag_content(inner, &VERIFY_TAG),
                done: tag_content(inner, &DONE_TAG),
            }
        })
        .collect()
}

/// Returns the trimmed inner text of the first `<tag>...</tag>` pair.
fn tag_content(block: &str, re: &Regex) -> Option<String> {
    let cap = re.captures(block)?;
    Some(cap.get(1)?.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::{extract, TaskRecord};

    #[test]
    fn extracts_all_fields() {
        let body = r#"
<task type="code">
  <name>Task 1: Build X</name>
  <files>src/x.rs</files>
  <action>Do X</action>
  <verify>cargo test</verify>
  <done>X works</done>
</task>
"#;
        let tasks = extract(body);
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.task_type, "code");
        assert_eq!(task.name.as_deref(), Some("Task 1: Build X"));
        assert_eq!(task.files.as_deref(), Some("src/x.rs"));
        assert_eq!(task.action.as_deref(), Some("Do X"));
        assert_eq!(task.verify.as_deref(), Some("cargo test"));
        assert_eq!(task.done.as_deref(), Some("X works"));
    }

    #[test]
    fn missing_sub_elements_stay_absent() {
        let body = r#"<task type="chore"></task>"#;
        let tasks = extract(body);
        assert_eq!(tasks, vec![TaskRecord { task_type: "chore".to_string(), ..Default::default() }]);
    }

    #[test]
    fn preserves_document_order() {
        let body = r#"
<task type="code"><name>first</name></task>
prose between tasks
<task type="test"><name>second</name></task>
"#;
        let tasks = extract(body);
        let names: Vec<_> = tasks.iter().filter_map(|t| t.name.as_deref()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn unclosed_block_is_skipped() {
        let body = r#"<task type="code"><name>never closed</name>"#;
        assert!(extract(body).is_empty());
    }

    #[test]
    fn block_without_type_attribute_is_skipped() {
        let body = "<task><name>untyped</name></task>";
        assert!(extract(body).is_empty());
    }

    #[test]
    fn multiline_inner_content_is_trimmed() {
        let body = "<task type=\"code\"><action>\n  line one\n  line two\n</action></task>";
        let tasks = extract(body);
        assert_eq!(tasks[0].action.as_deref(), Some("line one\n  line two"));
    }
}
