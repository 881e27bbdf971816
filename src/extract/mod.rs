//! Best-effort extractors over semi-structured planning documents.
//!
//! Every extractor in this module is a pure function that resolves missing
//! or malformed structure to a documented default instead of erroring.

pub mod frontmatter;
pub mod project;
pub mod roadmap;
pub mod tasks;

pub use project::ProjectInfo;
pub use roadmap::PhaseInfo;
pub use tasks::TaskRecord;
