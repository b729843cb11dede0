// Tue Oct 13 2026 - Alex

use crate::structure::ConstantScoping;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STDIO: &str = "-";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: String,
    pub output: String,
    pub rename_rules: String,
    pub no_format: bool,
    pub formatter: String,
    pub package: Option<String>,
    pub constant_scoping: ConstantScoping,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: STDIO.to_string(),
            output: STDIO.to_string(),
            rename_rules: String::new(),
            no_format: false,
            formatter: "gofmt".to_string(),
            package: None,
            constant_scoping: ConstantScoping::Streaming,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_rename_rules(mut self, rules: impl Into<String>) -> Self {
        self.rename_rules = rules.into();
        self
    }

    pub fn with_no_format(mut self, no_format: bool) -> Self {
        self.no_format = no_format;
        self
    }

    pub fn with_formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = formatter.into();
        self
    }

    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn with_constant_scoping(mut self, scoping: ConstantScoping) -> Self {
        self.constant_scoping = scoping;
        self
    }

    pub fn reads_stdin(&self) -> bool {
        self.input == STDIO
    }

    pub fn writes_stdout(&self) -> bool {
        self.output == STDIO
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.no_format && self.formatter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "formatter command is empty; set one or disable formatting".to_string(),
            ));
        }
        if let Some(package) = &self.package {
            let mut chars = package.chars();
            let valid_start = chars.next().map_or(false, |c| c.is_alphabetic() || c == '_');
            if !valid_start || !chars.all(|c| c.is_alphanumeric() || c == '_') {
                return Err(ConfigError::Invalid(format!("package name {:?} is not an identifier", package)));
            }
        }
        Ok(())
    }
}
