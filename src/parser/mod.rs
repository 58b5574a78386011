//! Option declaration and parsing
//!
//! This module handles declaring typed options, scanning token sequences,
//! and rendering usage and help text.

pub mod registry;
pub mod scan;
pub mod types;

// Re-export main types
pub use registry::*;
pub use scan::*;
pub use types::*;
