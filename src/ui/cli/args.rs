// Wed Oct 14 2026 - Alex

use crate::config::{Config, ConfigError};
use crate::structure::ConstantScoping;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adata-dsect")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate Go structures from assembler ADATA DSECT records", long_about = None)]
pub struct Args {
    /// Input ADATA file, `-` for stdin
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file, `-` for stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Regexes separated by ';' to change symbol names, e.g. "@/_ptr_;$/_D_;#/_size"
    #[arg(short = 's', long = "rename")]
    pub rename: Option<String>,

    /// Don't pipe output through the formatter
    #[arg(short, long)]
    pub no_format: bool,

    #[arg(long)]
    pub formatter: Option<String>,

    /// Emit a package clause
    #[arg(long)]
    pub package: Option<String>,

    /// Attach constants to their DSECT even when it is defined later
    #[arg(long)]
    pub deferred_constants: bool,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(rename) = &self.rename {
            config.rename_rules = rename.clone();
        }
        if self.no_format {
            config.no_format = true;
        }
        if let Some(formatter) = &self.formatter {
            config.formatter = formatter.clone();
        }
        if self.package.is_some() {
            config.package = self.package.clone();
        }
        if self.deferred_constants {
            config.constant_scoping = ConstantScoping::Deferred;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
