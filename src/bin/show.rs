//! Echo whatever was supplied via `--show`.
//!
//! When invoked without arguments this command prompts for one line of
//! input and splits it with shell-style quoting rules, so a quoted value
//! like `--show "Hello World!"` stays a single token.

use std::process;

use optar::{cli, ArgumentParser, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser = ArgumentParser::new("show");
    parser.define(
        "show",
        ValueKind::Str,
        None,
        "prints to screen whichever argument is provided",
    )?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    if let Some(text) = args.get_str("show") {
        println!("{}", text);
    }

    Ok(())
}
