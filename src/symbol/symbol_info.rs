// Tue Oct 13 2026 - Alex

use crate::record::types::{ESD, SYMBOL};
use crate::record::RecordError;
use crate::utils::{BinaryUtils, Codepage};
use std::fmt;

pub const ESD_SECTION_ENTRY: u8 = 0xff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    StructureHeader,
    Storage,
    Constant,
    Other(u8),
}

impl From<u8> for SymbolKind {
    fn from(value: u8) -> Self {
        match value {
            0x02 => Self::StructureHeader,
            0x0d => Self::Storage,
            0x0c => Self::Constant,
            other => Self::Other(other),
        }
    }
}

struct Body<'a> {
    data: &'a [u8],
    record_type: u16,
}

impl<'a> Body<'a> {
    fn truncated(&self, field: &'static str, needed: usize) -> RecordError {
        RecordError::TruncatedBody {
            record_type: self.record_type,
            field,
            needed,
            available: self.data.len(),
        }
    }

    fn u8(&self, offset: usize, field: &'static str) -> Result<u8, RecordError> {
        BinaryUtils::read_u8(self.data, offset).ok_or_else(|| self.truncated(field, offset + 1))
    }

    fn u16(&self, offset: usize, field: &'static str) -> Result<u16, RecordError> {
        BinaryUtils::read_u16_be(self.data, offset).ok_or_else(|| self.truncated(field, offset + 2))
    }

    fn u32(&self, offset: usize, field: &'static str) -> Result<u32, RecordError> {
        BinaryUtils::read_u32_be(self.data, offset).ok_or_else(|| self.truncated(field, offset + 4))
    }

    fn text(&self, offset: usize, len: usize, field: &'static str) -> Result<String, RecordError> {
        BinaryUtils::read_bytes(self.data, offset, len)
            .map(Codepage::decode)
            .ok_or_else(|| self.truncated(field, offset.saturating_add(len)))
    }
}

/// Section entry from an External Symbol Dictionary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsdRecord {
    pub esdid: u32,
    pub size: u32,
    pub name: Option<String>,
}

impl EsdRecord {
    /// `Ok(None)` when the body is not a section entry.
    pub fn decode(data: &[u8]) -> Result<Option<Self>, RecordError> {
        let body = Body { data, record_type: ESD };
        if body.u8(0, "discriminator")? != ESD_SECTION_ENTRY {
            return Ok(None);
        }

        let size = body.u32(20, "section size")?;
        let name_len = body.u32(40, "name length")? as usize;
        let esdid = body.u32(4, "esdid")?;
        let name = if name_len > 0 {
            Some(body.text(52, name_len, "name")?)
        } else {
            None
        };

        Ok(Some(Self { esdid, size, name }))
    }
}

/// Fixed-layout body of a Symbol record. All fields are big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub esdid: u32,
    pub statement: u32,
    pub location: u32,
    pub kind: SymbolKind,
    pub dup_factor: u32,
    pub type_attr: u8,
    pub asm_type: String,
    pub program_type: u32,
    pub length_attr: u32,
    pub integer_attr: u16,
    pub scale_attr: u16,
    pub flags: u8,
    pub name_offset: u32,
    pub name: String,
}

impl SymbolRecord {
    pub fn decode(data: &[u8]) -> Result<Self, RecordError> {
        let body = Body { data, record_type: SYMBOL };
        let name_len = body.u32(46, "name length")? as usize;

        Ok(Self {
            esdid: body.u32(0, "esdid")?,
            statement: body.u32(4, "statement")?,
            location: body.u32(8, "location")?,
            kind: SymbolKind::from(body.u8(12, "symbol type")?),
            dup_factor: body.u32(13, "duplication factor")?,
            type_attr: body.u8(17, "type attribute")?,
            asm_type: body.text(18, 4, "assembler type")?,
            program_type: body.u32(22, "program type")?,
            length_attr: body.u32(26, "length attribute")?,
            integer_attr: body.u16(30, "integer attribute")?,
            scale_attr: body.u16(32, "scale attribute")?,
            flags: body.u8(34, "flags")?,
            name_offset: body.u32(42, "name offset")?,
            name: body.text(50, name_len, "name")?,
        })
    }

    pub fn value(&self) -> i32 {
        self.location as i32
    }
}

impl fmt::Display for SymbolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} esdid {} stmt {} loc 0x{:x} kind {:?} type '{}' len {} dup {}",
            self.name,
            self.esdid,
            self.statement,
            self.location,
            self.kind,
            self.asm_type.trim(),
            self.length_attr,
            self.dup_factor
        )
    }
}
