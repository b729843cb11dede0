// Tue Oct 13 2026 - Alex

use crate::output::error::FormatError;
use log::{debug, warn};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

/// An external source formatter fed on stdin and read back from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(command_line: &str) -> Result<Self, FormatError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(FormatError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn format(&self, text: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FormatError::Spawn {
                command: self.command_line(),
                source: e,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            FormatError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "formatter stdin unavailable"))
        })?;
        let input = text.as_bytes().to_vec();
        let writer = thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;
        let written = writer.join().unwrap_or_else(|_| {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "formatter writer panicked"))
        });

        if !output.status.success() {
            return Err(FormatError::Failed {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        debug!("{} reformatted {} bytes into {}", self.program, text.len(), output.stdout.len());
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Formatted text, or `text` unchanged when formatting fails.
    pub fn format_or_raw(&self, text: String) -> String {
        match self.format(&text) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!("{}; writing unformatted output", e);
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let f = ExternalFormatter::new("gofmt -s").unwrap();
        assert_eq!(f.program, "gofmt");
        assert_eq!(f.args, vec!["-s".to_string()]);
        assert_eq!(f.command_line(), "gofmt -s");
        assert!(matches!(ExternalFormatter::new("   "), Err(FormatError::EmptyCommand)));
    }

    #[cfg(unix)]
    #[test]
    fn test_pass_through_formatter() {
        let f = ExternalFormatter::new("cat").unwrap();
        let text = "type A struct {\n}\n".repeat(5000);
        assert_eq!(f.format(&text).unwrap(), text);
    }

    #[test]
    fn test_missing_formatter_falls_back() {
        let f = ExternalFormatter::new("adata-dsect-no-such-formatter").unwrap();
        assert!(matches!(f.format("x"), Err(FormatError::Spawn { .. })));
        assert_eq!(f.format_or_raw("raw text\n".to_string()), "raw text\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_formatter_falls_back() {
        let f = ExternalFormatter::new("false").unwrap();
        assert!(matches!(f.format("x"), Err(FormatError::Failed { .. })));
        assert_eq!(f.format_or_raw("keep\n".to_string()), "keep\n");
    }
}
