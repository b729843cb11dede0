// Tue Oct 13 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

pub const ESD: u16 = 0x0020;
pub const SYMBOL: u16 = 0x0042;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordType {
    pub code: u16,
    pub name: &'static str,
    pub edition: u8,
}

const KNOWN_TYPES: &[RecordType] = &[
    RecordType { code: 0x0000, name: "Job Identification", edition: 1 },
    RecordType { code: 0x0001, name: "ADATA Identification", edition: 0 },
    RecordType { code: 0x0002, name: "Compilation Unit Start/End", edition: 0 },
    RecordType { code: 0x000a, name: "Output File Information", edition: 1 },
    RecordType { code: 0x000b, name: "Options File Information", edition: 1 },
    RecordType { code: 0x0010, name: "Options", edition: 3 },
    RecordType { code: ESD, name: "External Symbol Dictionary", edition: 1 },
    RecordType { code: 0x0030, name: "Source Analysis", edition: 1 },
    RecordType { code: 0x0032, name: "Source Error", edition: 1 },
    RecordType { code: 0x0034, name: "DC/DS", edition: 1 },
    RecordType { code: 0x0035, name: "DC Extension", edition: 1 },
    RecordType { code: 0x0036, name: "Machine Instruction", edition: 1 },
    RecordType { code: 0x0040, name: "Relocation Dictionary", edition: 1 },
    RecordType { code: SYMBOL, name: "Symbol", edition: 1 },
    RecordType { code: 0x0044, name: "Symbol and Literal Cross Reference", edition: 1 },
    RecordType { code: 0x0045, name: "Register Cross Reference", edition: 1 },
    RecordType { code: 0x0060, name: "Macro and Copy Code Source Summary", edition: 1 },
    RecordType { code: 0x0062, name: "Macro and Copy Code Cross Reference", edition: 1 },
    RecordType { code: 0x0070, name: "User Data", edition: 1 },
    RecordType { code: 0x0080, name: "USING Map", edition: 1 },
    RecordType { code: 0x0090, name: "Assembly Statistics", edition: 2 },
];

static REGISTRY: Lazy<HashMap<u16, RecordType>> =
    Lazy::new(|| KNOWN_TYPES.iter().map(|t| (t.code, *t)).collect());

impl RecordType {
    pub fn lookup(code: u16) -> Option<RecordType> {
        REGISTRY.get(&code).copied()
    }

    pub fn is_known(code: u16) -> bool {
        REGISTRY.contains_key(&code)
    }

    pub fn all() -> &'static [RecordType] {
        KNOWN_TYPES
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x} {} (edition {})", self.code, self.name, self.edition)
    }
}
