//! Port traits defining external boundaries.
//!
//! The converter has exactly one external boundary: the filesystem that
//! holds the planning documents and receives the generated artifacts.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
