//! Shell-style word splitting
//!
//! Splits one interactively-entered line into argv-like tokens: unquoted
//! whitespace separates tokens, single or double quotes preserve embedded
//! whitespace, and the quotes themselves are stripped from the result.

use crate::error::{SplitError, SplitResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    Start,
    ReadingWord,
    ReadingSingleQuote,
    ReadingDoubleQuote,
}

struct SplitFsm {
    state: SplitState,
    buffer: String,
    tokens: Vec<String>,
}

impl SplitFsm {
    fn new() -> Self {
        SplitFsm {
            state: SplitState::Start,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self, line: &str) -> SplitResult<Vec<String>> {
        for ch in line.chars() {
            match self.state {
                SplitState::Start => self.handle_start(ch),
                SplitState::ReadingWord => self.handle_word(ch),
                SplitState::ReadingSingleQuote => self.handle_quote(ch, '\''),
                SplitState::ReadingDoubleQuote => self.handle_quote(ch, '"'),
            }
        }

        match self.state {
            SplitState::ReadingSingleQuote => return Err(SplitError::UnclosedQuote('\'')),
            SplitState::ReadingDoubleQuote => return Err(SplitError::UnclosedQuote('"')),
            SplitState::ReadingWord => self.tokens.push(std::mem::take(&mut self.buffer)),
            SplitState::Start => {}
        }

        Ok(self.tokens)
    }

    fn handle_start(&mut self, ch: char) {
        match ch {
            c if c.is_whitespace() => {}
            '\'' => self.state = SplitState::ReadingSingleQuote,
            '"' => self.state = SplitState::ReadingDoubleQuote,
            c => {
                self.buffer.push(c);
                self.state = SplitState::ReadingWord;
            }
        }
    }

    fn handle_word(&mut self, ch: char) {
        match ch {
            c if c.is_whitespace() => {
                self.tokens.push(std::mem::take(&mut self.buffer));
                self.state = SplitState::Start;
            }
            // A quote inside a word glues onto the current token
            '\'' => self.state = SplitState::ReadingSingleQuote,
            '"' => self.state = SplitState::ReadingDoubleQuote,
            c => self.buffer.push(c),
        }
    }

    fn handle_quote(&mut self, ch: char, closing: char) {
        if ch == closing {
            self.state = SplitState::ReadingWord;
        } else {
            self.buffer.push(ch);
        }
    }
}

/// Split a line into tokens using POSIX-shell-style quoting rules.
///
/// ```
/// use optar::split_shell_like;
///
/// let tokens = split_shell_like("--show \"Hello World!\"").unwrap();
/// assert_eq!(tokens, vec!["--show", "Hello World!"]);
/// ```
pub fn split_shell_like(line: &str) -> SplitResult<Vec<String>> {
    SplitFsm::new().run(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_whitespace_split() {
        let tokens = split_shell_like("--n 5").unwrap();
        assert_eq!(tokens, vec!["--n", "5"]);
    }

    #[test]
    fn test_double_quotes_preserve_space() {
        let tokens = split_shell_like("--show \"Hello World!\"").unwrap();
        assert_eq!(tokens, vec!["--show", "Hello World!"]);
    }

    #[test]
    fn test_single_quotes_preserve_space() {
        let tokens = split_shell_like("--show 'a b  c'").unwrap();
        assert_eq!(tokens, vec!["--show", "a b  c"]);
    }

    #[test]
    fn test_quotes_glue_to_surrounding_word() {
        let tokens = split_shell_like("a\"b c\"d").unwrap();
        assert_eq!(tokens, vec!["ab cd"]);
    }

    #[test]
    fn test_empty_quoted_token() {
        let tokens = split_shell_like("\"\"").unwrap();
        assert_eq!(tokens, vec![""]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokens = split_shell_like("  --flag\t--reverse-flag  ").unwrap();
        assert_eq!(tokens, vec!["--flag", "--reverse-flag"]);
    }

    #[test]
    fn test_empty_line() {
        let tokens = split_shell_like("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_unclosed_double_quote() {
        let result = split_shell_like("--show \"Hello");
        assert_eq!(result, Err(SplitError::UnclosedQuote('"')));
    }

    #[test]
    fn test_unclosed_single_quote() {
        let result = split_shell_like("'oops");
        assert_eq!(result, Err(SplitError::UnclosedQuote('\'')));
    }

    #[test]
    fn test_other_quote_kind_is_literal() {
        let tokens = split_shell_like("\"it's fine\"").unwrap();
        assert_eq!(tokens, vec!["it's fine"]);
    }
}
