//! Print the state of a flag and a reverse flag.

use std::process;

use optar::{cli, ArgumentParser, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser = ArgumentParser::new("toggles")
        .about("Demo program")
        .with_version("toggles v1.0");
    parser.define(
        "flag",
        ValueKind::FlagTrue,
        None,
        "when provided sets to true, otherwise false",
    )?;
    parser.define(
        "reverse-flag",
        ValueKind::FlagFalse,
        None,
        "when provided sets to false, otherwise true",
    )?;
    parser.define("version", ValueKind::Version, None, "show version and exit")?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    println!("{}", args.get_flag("flag"));
    println!("{}", args.get_flag("reverse-flag"));

    Ok(())
}
