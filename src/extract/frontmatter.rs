//! YAML frontmatter splitting for plan documents.

use serde_yaml::{Mapping, Value};

/// Splits a document into its YAML frontmatter mapping and body.
///
/// Documents that do not begin with a `---` delimiter, or whose
/// frontmatter fails to parse, yield an empty mapping and the original
/// text untouched. A parse failure never produces partial metadata.
#[must_use]
pub fn parse(content: &str) -> (Value, String) {
    if !content.starts_with("---") {
        return (empty(), content.to_string());
    }

    let parts: Vec<&str> = content.splitn(3, "---").collect();
    if parts.len() < 3 {
        return (empty(), content.to_string());
    }

    match serde_yaml::from_str::<Value>(parts[1]) {
        Ok(Value::Mapping(map)) => (Value::Mapping(map), parts[2].trim().to_string()),
        Ok(_) => (empty(), parts[2].trim().to_string()),
        Err(_) => (empty(), content.to_string()),
    }
}

fn empty() -> Value {
    Value::Mapping(Mapping::new())
}
