//! Optar - a tiny argparse-style command-line option parser
//!
//! Optar declares named, typed options with defaults and actions, parses a
//! flat sequence of tokens (from the process invocation or from splitting an
//! interactively-entered line), and reports usage errors. The crate ships a
//! handful of small demonstration commands built on the library.

// Public modules
pub mod cli;
pub mod error;
pub mod parser;
pub mod tokenize;

// Re-export commonly used types
pub use error::{OptarError, Result};
pub use parser::{ArgumentParser, Outcome, ParsedArguments, Value, ValueKind};
pub use tokenize::split_shell_like;

/// Current version of Optar
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
