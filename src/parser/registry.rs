//! Option declaration registry
//!
//! An [`ArgumentParser`] collects option declarations in order, rejects
//! duplicate names, and renders the usage line and help text derived from
//! the declarations.

use crate::error::{ConfigError, ConfigResult};
use crate::parser::types::{OptionSpec, Value, ValueKind};

/// A declared set of command-line options for one command
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    /// Program name shown in the usage line
    name: String,

    /// One-line description shown in help output
    about: Option<String>,

    /// Version string printed by a Version-kind option
    version: Option<String>,

    /// Declared options, in declaration order
    specs: Vec<OptionSpec>,
}

impl ArgumentParser {
    /// Create a parser for the named program
    pub fn new(name: &str) -> Self {
        ArgumentParser {
            name: name.to_string(),
            about: None,
            version: None,
            specs: Vec::new(),
        }
    }

    /// Set the program description shown in help output
    pub fn about(mut self, about: &str) -> Self {
        self.about = Some(about.to_string());
        self
    }

    /// Set the version string printed by a Version-kind option
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Register an option.
    ///
    /// Fails when `name` is already registered; declaration order is
    /// preserved for help rendering.
    pub fn define(
        &mut self,
        name: &str,
        kind: ValueKind,
        default: Option<Value>,
        help: &str,
    ) -> ConfigResult<()> {
        if self.specs.iter().any(|s| s.name == name) {
            return Err(ConfigError::DuplicateOption(name.to_string()));
        }

        self.specs.push(OptionSpec {
            name: name.to_string(),
            kind,
            default,
            help: help.to_string(),
        });

        Ok(())
    }

    /// Program name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared options in declaration order
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Find the declaration selected by a `--name` token
    pub(crate) fn find(&self, token: &str) -> Option<&OptionSpec> {
        let name = token.strip_prefix("--")?;
        self.specs.iter().find(|s| s.name == name)
    }

    /// The text printed by a Version-kind option
    pub fn version_text(&self) -> String {
        self.version
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.name, crate::VERSION))
    }

    /// One-line usage summary
    pub fn usage(&self) -> String {
        let mut line = format!("usage: {} [-h]", self.name);
        for spec in &self.specs {
            if spec.kind.takes_value() {
                line.push_str(&format!(" [{} {}]", spec.flag(), spec.name.to_uppercase()));
            } else {
                line.push_str(&format!(" [{}]", spec.flag()));
            }
        }
        line
    }

    /// Full help text: usage line, description, and the option table
    pub fn help_text(&self) -> String {
        let mut rows: Vec<(String, String)> = vec![(
            "-h, --help".to_string(),
            "Show this help message and exit".to_string(),
        )];
        for spec in &self.specs {
            let invocation = if spec.kind.takes_value() {
                format!("{} {}", spec.flag(), spec.name.to_uppercase())
            } else {
                spec.flag()
            };
            rows.push((invocation, spec.help.clone()));
        }

        let width = rows.iter().map(|(inv, _)| inv.len()).max().unwrap_or(0) + 2;

        let mut out = self.usage();
        out.push('\n');
        if let Some(about) = &self.about {
            out.push('\n');
            out.push_str(about);
            out.push('\n');
        }
        out.push_str("\noptions:\n");
        for (invocation, help) in rows {
            if help.is_empty() {
                out.push_str(&format!("  {}\n", invocation));
            } else {
                out.push_str(&format!("  {:width$}{}\n", invocation, help));
            }
        }
        out
    }
}
