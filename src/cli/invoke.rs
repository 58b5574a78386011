//! Token gathering and process-exit handling for commands

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use colored::Colorize;

use crate::error::Result;
use crate::parser::{ArgumentParser, Outcome, ParsedArguments};
use crate::tokenize::split_shell_like;

/// Prompt shown when no invocation arguments were supplied
const PROMPT: &str = "Enter CLI flags and args: ";

/// Gather the token sequence for this invocation.
///
/// Uses the process arguments when any are present. Otherwise prompts on
/// stderr (stdout stays reserved for parsed values), reads one line from
/// standard input, and splits it with shell-style quoting rules.
pub fn invocation_tokens() -> Result<Vec<String>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args);
    }
    prompted_tokens()
}

/// Read one line from standard input and shell-split it
fn prompted_tokens() -> Result<Vec<String>> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", PROMPT)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let tokens = split_shell_like(line.trim_end())?;
    Ok(tokens)
}

/// Parse tokens, terminating the process at the conventional CLI boundary.
///
/// Version and Help outcomes print to stdout and exit 0. A parse failure
/// prints the usage line and the error to stderr and exits 2. Only a fully
/// resolved [`ParsedArguments`] is ever returned to the caller.
pub fn parse_or_exit(parser: &ArgumentParser, tokens: &[String]) -> ParsedArguments {
    match parser.parse(tokens) {
        Ok(Outcome::Parsed(args)) => args,
        Ok(Outcome::Version(text)) => {
            println!("{}", text);
            process::exit(0);
        }
        Ok(Outcome::Help(text)) => {
            print!("{}", text);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", parser.usage());
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(2);
        }
    }
}
