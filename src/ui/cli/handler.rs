// Wed Oct 14 2026 - Alex

use super::args::Args;
use crate::engine::{ParseSummary, Runner};
use crate::utils::{pluralize, LoggingUtils};
use colored::Colorize;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        let config = args.to_config()?;
        LoggingUtils::init_logger(LoggingUtils::effective_level(&config.log_level, args.verbose));

        let summary = Runner::new(config).run()?;
        if args.verbose > 0 {
            self.print_summary(&summary);
        }
        Ok(())
    }

    // stdout may carry the generated source
    fn print_summary(&self, summary: &ParseSummary) {
        eprintln!(
            "{} {} read, {} and {}",
            "[+]".green(),
            pluralize(summary.records, "record", "records"),
            pluralize(summary.structures, "structure", "structures"),
            pluralize(summary.globals, "global constant", "global constants"),
        );
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
