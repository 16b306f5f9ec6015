//! Unified-diff rendering
//!
//! - `config`: Context width, line endings and the rest of `PatchConfig`
//! - `hunk`: Grouping an edit script into context-bounded hunks
//! - `patch_document`: File labels, the `PatchDocument` and its text form

pub mod config;
pub mod hunk;
pub mod patch_document;
