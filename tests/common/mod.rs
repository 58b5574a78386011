//! Common test utilities

/// Build an owned token sequence from string literals
pub fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
