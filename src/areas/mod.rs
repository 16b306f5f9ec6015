//! Collaborators around the diff core
//!
//! - `pipeline`: A single patch run with its configuration and output sink
//! - `workspace`: Reading input files into line sequences

pub mod pipeline;
pub mod workspace;
