// Tue Oct 13 2026 - Alex

use crate::record::{RecordError, RecordReader};
use crate::structure::{ConstantScoping, StructureRegistry};
use crate::symbol::{InterpreterStats, RecordInterpreter};
use crate::utils::HexDump;
use log::{debug, info, log_enabled, trace, Level};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    pub records: usize,
    pub bytes: u64,
    pub structures: usize,
    pub globals: usize,
    pub stats: InterpreterStats,
}

/// One parse invocation: reads every record, then closes the registry.
pub struct Engine {
    registry: StructureRegistry,
    interpreter: RecordInterpreter,
    state: EngineState,
}

impl Engine {
    pub fn new(scoping: ConstantScoping) -> Self {
        Self {
            registry: StructureRegistry::with_scoping(scoping),
            interpreter: RecordInterpreter::new(),
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn registry(&self) -> &StructureRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> StructureRegistry {
        self.registry
    }

    pub fn parse<R: Read>(&mut self, input: R) -> Result<ParseSummary, RecordError> {
        self.state = EngineState::Running;
        let mut reader = RecordReader::new(input);

        match self.read_all(&mut reader) {
            Ok(()) => {
                self.registry.finish();
                self.state = EngineState::Completed;
            }
            Err(e) => {
                debug!("Parse failed after {} records at offset {}: {}", reader.records_read(), reader.position(), e);
                self.state = EngineState::Failed;
                return Err(e);
            }
        }

        let summary = ParseSummary {
            records: reader.records_read(),
            bytes: reader.position(),
            structures: self.registry.len(),
            globals: self.registry.globals().len(),
            stats: self.interpreter.stats(),
        };
        info!(
            "Read {} records ({} bytes): {} structures, {} global constants",
            summary.records, summary.bytes, summary.structures, summary.globals
        );
        Ok(summary)
    }

    fn read_all<R: Read>(&mut self, reader: &mut RecordReader<R>) -> Result<(), RecordError> {
        while let Some(record) = reader.next_record()? {
            if log_enabled!(Level::Trace) {
                trace!("Record data for type {:04x}", record.header.record_type);
                for line in HexDump::lines(record.body) {
                    trace!("\t{}", line);
                }
            }
            self.interpreter.interpret(&record, &mut self.registry)?;
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ConstantScoping::default())
    }
}
