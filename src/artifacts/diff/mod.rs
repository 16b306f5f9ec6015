//! Line-level diffing
//!
//! This module implements the sequence differ:
//!
//! - `line`: The `Line` token and the splitter that produces it from text
//! - `diff_algorithm`: Myers' diff producing a minimal `EditScript`
//!
//! Lines are compared as opaque tokens. Nothing here knows about files,
//! encodings or patch syntax; that is left to `patch` and `areas`.

pub mod diff_algorithm;
pub mod line;
