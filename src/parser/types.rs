//! Core option declaration and value types
//!
//! This module defines the data structures that describe what a parser
//! accepts and what a successful parse produces.

use std::collections::HashMap;
use std::fmt;

/// What kind of value an option carries, and how parsing treats it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A free-form string value, consumed from the following token
    Str,
    /// A base-10 whole number, consumed from the following token
    Int,
    /// A decimal or scientific-notation number, consumed from the following token
    Float,
    /// A switch that sets `true` when present; never consumes a token
    FlagTrue,
    /// A switch that sets `false` when present; never consumes a token
    FlagFalse,
    /// Prints the configured version string and stops parsing
    Version,
}

impl ValueKind {
    /// Human-readable type label, used in help and error messages
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::FlagTrue | ValueKind::FlagFalse => "flag",
            ValueKind::Version => "version",
        }
    }

    /// Whether this kind consumes the token following the option name
    pub fn takes_value(&self) -> bool {
        matches!(self, ValueKind::Str | ValueKind::Int | ValueKind::Float)
    }
}

/// A typed value produced by parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps the decimal point on whole floats (0.0, not 0)
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A single option declaration
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Option name, unique within a parser (matched as `--name`)
    pub name: String,

    /// The kind of value this option carries
    pub kind: ValueKind,

    /// Default used when the option is absent from the token sequence
    pub default: Option<Value>,

    /// Usage description for help text
    pub help: String,
}

impl OptionSpec {
    /// The token that selects this option on the command line
    pub fn flag(&self) -> String {
        format!("--{}", self.name)
    }

    /// The value this option resolves to when no token names it.
    ///
    /// Flag kinds ignore any declared default and resolve to the inverse of
    /// their fixed toggle; Version resolves to nothing.
    pub fn resolved_default(&self) -> Option<Value> {
        match self.kind {
            ValueKind::FlagTrue => Some(Value::Bool(false)),
            ValueKind::FlagFalse => Some(Value::Bool(true)),
            ValueKind::Version => None,
            _ => self.default.clone(),
        }
    }
}

/// The immutable result of a successful parse.
///
/// Every declared non-action option is present, resolved to its parsed
/// value, its default, or `None` when absent with no default.
#[derive(Debug, Clone, Default)]
pub struct ParsedArguments {
    values: HashMap<String, Option<Value>>,
}

impl ParsedArguments {
    pub(crate) fn new() -> Self {
        ParsedArguments {
            values: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, value: Option<Value>) {
        self.values.insert(name, value);
    }

    /// Get the raw value for an option, if one resolved
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(|v| v.as_ref())
    }

    /// Whether the option resolved to a value (parsed or defaulted)
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get a string option value
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Get an integer option value
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Get a float option value
    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// Get a flag value; `false` when the option never resolved
    pub fn get_flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(Value::Bool(true)))
    }
}
