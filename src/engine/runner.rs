// Tue Oct 13 2026 - Alex

use crate::config::Config;
use crate::engine::core::{Engine, ParseSummary};
use crate::output::{Emitter, ExternalFormatter, NameRules, NameSanitizer};
use crate::structure::StructureRegistry;
use anyhow::Context;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the configured input and writes the generated declarations.
    pub fn run(&self) -> anyhow::Result<ParseSummary> {
        self.config.validate()?;
        let sanitizer = self.sanitizer();

        let input: Box<dyn Read> = if self.config.reads_stdin() {
            Box::new(io::stdin().lock())
        } else {
            let file = File::open(&self.config.input)
                .with_context(|| format!("Cannot open {} for read", self.config.input))?;
            Box::new(file)
        };

        let (text, summary) = self.generate(BufReader::new(input), sanitizer)?;
        self.write_output(&text)?;
        Ok(summary)
    }

    pub fn generate<R: Read>(&self, input: R, sanitizer: NameSanitizer) -> anyhow::Result<(String, ParseSummary)> {
        let mut engine = Engine::new(self.config.constant_scoping);
        let summary = engine.parse(input).context("Parsing input")?;
        let text = self.render(engine.registry(), sanitizer);
        Ok((text, summary))
    }

    /// Rename-rule problems are reported here and never stop the run.
    pub fn sanitizer(&self) -> NameSanitizer {
        let (rules, error) = NameRules::parse(&self.config.rename_rules);
        if let Some(e) = error {
            warn!("{}", e);
        }
        NameSanitizer::new(rules)
    }

    fn render(&self, registry: &StructureRegistry, sanitizer: NameSanitizer) -> String {
        let text = Emitter::new(sanitizer)
            .with_package(self.config.package.clone())
            .render(registry);

        if self.config.no_format {
            return text;
        }
        match ExternalFormatter::new(&self.config.formatter) {
            Ok(formatter) => formatter.format_or_raw(text),
            Err(e) => {
                warn!("{}; writing unformatted output", e);
                text
            }
        }
    }

    fn write_output(&self, text: &str) -> anyhow::Result<()> {
        if self.config.writes_stdout() {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        } else {
            let file = File::create(&self.config.output)
                .with_context(|| format!("Cannot open {} for write", self.config.output))?;
            let mut out = BufWriter::new(file);
            out.write_all(text.as_bytes())?;
            out.flush()?;
            info!("Wrote {} bytes to {}", text.len(), self.config.output);
        }
        Ok(())
    }
}
