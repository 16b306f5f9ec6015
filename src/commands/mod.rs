//! Command implementations
//!
//! - `make_patch`: Diff two files and write the unified-diff patch to the
//!   pipeline's output sink

pub mod make_patch;
