//! End-to-end tests for the demo commands

use assert_cmd::Command;
use predicates::prelude::*;

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

#[test]
fn test_factorial_computes() {
    bin("factorial")
        .args(["--factorial", "5"])
        .assert()
        .success()
        .stdout("120\n");
}

#[test]
fn test_factorial_without_option_prints_nothing() {
    bin("factorial")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_factorial_rejects_non_numeric_value() {
    bin("factorial")
        .args(["--factorial", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage: factorial"))
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn test_factorial_rejects_negative_input() {
    bin("factorial")
        .args(["--factorial", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not defined"));
}

#[test]
fn test_power_computes() {
    bin("power")
        .args(["--base", "2", "--exponent", "3"])
        .assert()
        .success()
        .stdout("8.0\n");
}

#[test]
fn test_power_accepts_negative_exponent() {
    bin("power")
        .args(["--base", "2.0", "--exponent", "-2"])
        .assert()
        .success()
        .stdout("0.25\n");
}

#[test]
fn test_divide_prints_each_value_in_order() {
    bin("divide")
        .args(["--num1", "3", "--num2", "4.5"])
        .assert()
        .success()
        .stdout("1.0\n1.5\n");
}

#[test]
fn test_divide_skips_absent_values() {
    bin("divide")
        .args(["--num2", "4.5"])
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn test_density_defaults_to_zero() {
    bin("density")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("0.0\n");
}

#[test]
fn test_density_uses_supplied_value() {
    bin("density")
        .args(["--density", "2.5"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_toggles_defaults() {
    bin("toggles")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("false\ntrue\n");
}

#[test]
fn test_toggles_both_set() {
    bin("toggles")
        .args(["--flag", "--reverse-flag"])
        .assert()
        .success()
        .stdout("true\nfalse\n");
}

#[test]
fn test_toggles_version_wins_over_trailing_tokens() {
    bin("toggles")
        .args(["--version", "--flag", "--no-such-option"])
        .assert()
        .success()
        .stdout("toggles v1.0\n");
}

#[test]
fn test_toggles_help() {
    bin("toggles")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: toggles"))
        .stdout(predicate::str::contains("--reverse-flag"));
}

#[test]
fn test_show_reads_interactive_line() {
    bin("show")
        .write_stdin("--show \"Hello World!\"\n")
        .assert()
        .success()
        .stdout("Hello World!\n")
        .stderr(predicate::str::contains("Enter CLI flags and args"));
}

#[test]
fn test_show_with_process_arguments() {
    bin("show")
        .args(["--show", "Hello World!"])
        .assert()
        .success()
        .stdout("Hello World!\n");
}

#[test]
fn test_show_rejects_unknown_option() {
    bin("show")
        .args(["--hide", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unrecognized argument"));
}
