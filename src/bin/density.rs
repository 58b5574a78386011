//! Print `--density`, falling back to its declared default.

use std::process;

use optar::{cli, ArgumentParser, Value, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser = ArgumentParser::new("density").about("Demo program");
    parser.define(
        "density",
        ValueKind::Float,
        Some(Value::Float(0.0)),
        "density provided as a float",
    )?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    // The default guarantees a value is always present
    let density = args.get_float("density").unwrap_or(0.0);
    println!("{}", Value::Float(density));

    Ok(())
}
