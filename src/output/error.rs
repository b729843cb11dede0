// Tue Oct 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RuleError {
    #[error("change expression \"{0}\" is not valid, it should be of the form \"from.../to...\"")]
    Malformed(String),
    #[error("regex changing \"{pattern}\" to \"{replacement}\" is not valid: {source}")]
    InvalidPattern {
        pattern: String,
        replacement: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("formatter command is empty")]
    EmptyCommand,
    #[error("failed to run formatter {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("formatter {command} exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("formatter output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
