// Tue Oct 13 2026 - Alex

pub mod interpreter;
pub mod symbol_info;

pub use interpreter::{InterpreterStats, RecordInterpreter};
pub use symbol_info::{EsdRecord, SymbolKind, SymbolRecord};
