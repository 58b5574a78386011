//! Raise `--base` to `--exponent`.

use std::process;

use optar::{cli, ArgumentParser, Value, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser = ArgumentParser::new("power").about("Calculate the power of a number");
    parser.define("base", ValueKind::Float, None, "base number")?;
    parser.define(
        "exponent",
        ValueKind::Float,
        None,
        "exponent, can be float or negative",
    )?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    if let (Some(base), Some(exponent)) = (args.get_float("base"), args.get_float("exponent")) {
        println!("{}", Value::Float(base.powf(exponent)));
    }

    Ok(())
}
