//! Divide each supplied number by three.

use std::process;

use optar::{cli, ArgumentParser, Value, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser = ArgumentParser::new("divide").about("Divide by 3");
    parser.define("num1", ValueKind::Float, None, "Option 1")?;
    parser.define("num2", ValueKind::Float, None, "Option 2")?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    if let Some(num1) = args.get_float("num1") {
        println!("{}", Value::Float(num1 / 3.0));
    }

    if let Some(num2) = args.get_float("num2") {
        println!("{}", Value::Float(num2 / 3.0));
    }

    Ok(())
}
