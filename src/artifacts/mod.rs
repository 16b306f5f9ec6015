//! Diff data structures and algorithms
//!
//! This module contains the pure, in-memory part of the tool:
//!
//! - `core`: Error taxonomy and the line-ending output adapter
//! - `diff`: Line tokens and Myers' shortest edit script
//! - `patch`: Hunk grouping, configuration and unified-diff serialization
//!
//! Nothing in here touches the file system; reading inputs and writing the
//! patch belong to `areas`.

pub mod core;
pub mod diff;
pub mod patch;
