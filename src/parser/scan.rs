//! Token scanning
//!
//! Parsing is a single left-to-right scan with no backtracking. The
//! Version and Help actions are the only early exits, and both are
//! surfaced as [`Outcome`] variants instead of terminating the process,
//! so the caller decides the process lifecycle.

use std::collections::HashMap;

use crate::error::{ParseError, ParseResult};
use crate::parser::registry::ArgumentParser;
use crate::parser::types::{ParsedArguments, Value, ValueKind};

/// The result of scanning a token sequence
#[derive(Debug, Clone)]
pub enum Outcome {
    /// All tokens consumed; every declared option resolved
    Parsed(ParsedArguments),

    /// A Version-kind option was reached; carries the text to print
    Version(String),

    /// `-h`/`--help` was reached; carries the rendered help text
    Help(String),
}

impl ArgumentParser {
    /// Scan a token sequence against the declared options.
    ///
    /// String/Int/Float options consume the following token as their raw
    /// value; flag kinds toggle their fixed boolean without consuming
    /// anything. A Version-kind token or `--help` short-circuits the scan,
    /// trailing tokens included. Unrecognized tokens fail the parse.
    pub fn parse(&self, tokens: &[String]) -> ParseResult<Outcome> {
        let mut seen: HashMap<String, Value> = HashMap::new();

        let mut pos = 0;
        while pos < tokens.len() {
            let token = &tokens[pos];
            pos += 1;

            if token == "-h" || token == "--help" {
                return Ok(Outcome::Help(self.help_text()));
            }

            let spec = self
                .find(token)
                .ok_or_else(|| ParseError::UnknownToken(token.clone()))?;

            match spec.kind {
                ValueKind::Version => return Ok(Outcome::Version(self.version_text())),
                ValueKind::FlagTrue => {
                    seen.insert(spec.name.clone(), Value::Bool(true));
                }
                ValueKind::FlagFalse => {
                    seen.insert(spec.name.clone(), Value::Bool(false));
                }
                kind => {
                    let raw = tokens
                        .get(pos)
                        .ok_or_else(|| ParseError::MissingValue(spec.name.clone()))?;
                    pos += 1;
                    seen.insert(spec.name.clone(), convert(&spec.name, kind, raw)?);
                }
            }
        }

        // Resolve every declared option: parsed value, then default, then null
        let mut args = ParsedArguments::new();
        for spec in self.specs() {
            if spec.kind == ValueKind::Version {
                continue;
            }
            let value = seen.remove(&spec.name).or_else(|| spec.resolved_default());
            args.insert(spec.name.clone(), value);
        }

        Ok(Outcome::Parsed(args))
    }
}

/// Convert a raw token into the declared value type
fn convert(name: &str, kind: ValueKind, raw: &str) -> ParseResult<Value> {
    match kind {
        ValueKind::Str => Ok(Value::Str(raw.to_string())),
        ValueKind::Int => raw.parse::<i64>().map(Value::Int).map_err(|_| {
            ParseError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string(),
                expected: "base-10 integer",
            }
        }),
        ValueKind::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| {
            ParseError::InvalidValue {
                name: name.to_string(),
                value: raw.to_string(),
                expected: "number",
            }
        }),
        // Flag and Version kinds never reach conversion
        _ => unreachable!("kind {:?} does not take a value", kind),
    }
}
