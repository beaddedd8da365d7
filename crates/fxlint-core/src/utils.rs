//! Utility functions for rule implementations.

pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use paths::{base_name, dir_segments, has_segment, matches_any, segments, starts_with_dir};
