//! Process invocation surface
//!
//! This module gathers invocation tokens (from the command line, or from
//! one line of standard input when none were supplied) and maps parse
//! outcomes onto conventional process exits.

pub mod invoke;

// Re-export main types
pub use invoke::*;
