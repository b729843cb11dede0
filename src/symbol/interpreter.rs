// Tue Oct 13 2026 - Alex

use crate::record::types::{ESD, SYMBOL};
use crate::record::{Record, RecordError};
use crate::structure::{Member, StructureRegistry};
use crate::symbol::symbol_info::{EsdRecord, SymbolKind, SymbolRecord};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpreterStats {
    pub sections: usize,
    pub headers: usize,
    pub members: usize,
    pub constants: usize,
    pub other_symbols: usize,
    pub ignored_records: usize,
}

#[derive(Debug, Default)]
pub struct RecordInterpreter {
    stats: InterpreterStats,
}

impl RecordInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> InterpreterStats {
        self.stats
    }

    pub fn interpret(&mut self, record: &Record<'_>, registry: &mut StructureRegistry) -> Result<(), RecordError> {
        match record.header.record_type {
            ESD => self.interpret_esd(record.body, registry),
            SYMBOL => self.interpret_symbol(record.body, registry),
            _ => {
                self.stats.ignored_records += 1;
                Ok(())
            }
        }
    }

    fn interpret_esd(&mut self, body: &[u8], registry: &mut StructureRegistry) -> Result<(), RecordError> {
        let esd = match EsdRecord::decode(body)? {
            Some(esd) => esd,
            None => {
                self.stats.ignored_records += 1;
                return Ok(());
            }
        };

        let dsect = registry.define_section(esd.esdid, esd.name, esd.size);
        debug!("DSECT {} esdid {} size {}", dsect.name, dsect.esdid, dsect.total_size);
        self.stats.sections += 1;
        Ok(())
    }

    fn interpret_symbol(&mut self, body: &[u8], registry: &mut StructureRegistry) -> Result<(), RecordError> {
        let sym = SymbolRecord::decode(body)?;

        match sym.kind {
            SymbolKind::StructureHeader => {
                debug!("DSECT head {}", sym);
                registry.set_name(sym.esdid, sym.name);
                self.stats.headers += 1;
            }
            SymbolKind::Storage => {
                let member = Member::new(sym.name, sym.location, &sym.asm_type, sym.length_attr, sym.dup_factor);
                debug!("DSECT member {} esdid {}", member, sym.esdid);
                registry.add_member(sym.esdid, member);
                self.stats.members += 1;
            }
            SymbolKind::Constant => {
                let value = sym.value();
                debug!("EQU {} = {} (0x{:x}) esdid {}", sym.name, value, sym.location, sym.esdid);
                registry.add_constant(sym.esdid, sym.name, value);
                self.stats.constants += 1;
            }
            SymbolKind::Other(_) => {
                trace!("Sym {}", sym);
                self.stats.other_symbols += 1;
            }
        }
        Ok(())
    }
}
