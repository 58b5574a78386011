//! Calculate the factorial of a number supplied via `--factorial`.

use std::process;

use anyhow::bail;
use optar::{cli, ArgumentParser, ValueKind};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut parser =
        ArgumentParser::new("factorial").about("Calculate the factorial of a number");
    parser.define("factorial", ValueKind::Int, None, "integer")?;

    let tokens = cli::invocation_tokens()?;
    let args = cli::parse_or_exit(&parser, &tokens);

    if let Some(n) = args.get_int("factorial") {
        println!("{}", factorial(n)?);
    }

    Ok(())
}

fn factorial(n: i64) -> anyhow::Result<u128> {
    if n < 0 {
        bail!("factorial is not defined for negative numbers");
    }

    let mut acc: u128 = 1;
    for k in 2..=n as u128 {
        acc = match acc.checked_mul(k) {
            Some(product) => product,
            None => bail!("factorial of {} overflows", n),
        };
    }
    Ok(acc)
}
