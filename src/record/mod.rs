// Tue Oct 13 2026 - Alex

pub mod error;
pub mod header;
pub mod reader;
pub mod types;

pub use error::{ErrorCategory, RecordError};
pub use header::{HeaderFlags, RecordHeader, HEADER_LEN};
pub use reader::{Record, RecordReader, MAX_BODY_LEN};
pub use types::RecordType;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::header::{ARCHITECTURE_LEVEL, HEADER_LEN, LANGUAGE_ASSEMBLER};
    use super::types::RecordType;

    pub fn header_bytes(record_type: u16, edition: u8, body_len: u16, little_endian: bool) -> [u8; HEADER_LEN] {
        let mut raw = [0u8; HEADER_LEN];
        raw[0] = LANGUAGE_ASSEMBLER;
        raw[1..3].copy_from_slice(&record_type.to_be_bytes());
        raw[3] = ARCHITECTURE_LEVEL;
        raw[4] = if little_endian { 0x02 } else { 0x00 };
        raw[5] = edition;
        let len = if little_endian { body_len.to_le_bytes() } else { body_len.to_be_bytes() };
        raw[10..12].copy_from_slice(&len);
        raw
    }

    pub fn record_bytes(record_type: u16, body: &[u8], little_endian: bool) -> Vec<u8> {
        let edition = RecordType::lookup(record_type).map_or(1, |t| t.edition);
        let mut out = header_bytes(record_type, edition, body.len() as u16, little_endian).to_vec();
        out.extend_from_slice(body);
        out
    }

    /// Latin-1 text to EBCDIC, for the characters fixtures use.
    pub fn ebcdic(text: &str) -> Vec<u8> {
        text.chars()
            .map(|c| {
                (0..=255u8)
                    .find(|&b| crate::utils::Codepage::translate_byte(b) as u32 == c as u32)
                    .unwrap_or(0x4b)
            })
            .collect()
    }

    pub fn esd_body(esdid: u32, size: u32, name: &str) -> Vec<u8> {
        let name = ebcdic(name);
        let mut body = vec![0u8; 52];
        body[0] = 0xff;
        body[4..8].copy_from_slice(&esdid.to_be_bytes());
        body[20..24].copy_from_slice(&size.to_be_bytes());
        body[40..44].copy_from_slice(&(name.len() as u32).to_be_bytes());
        body.extend(name);
        body
    }

    pub struct SymbolBody {
        pub esdid: u32,
        pub location: u32,
        pub kind: u8,
        pub dup: u32,
        pub asm_type: &'static str,
        pub len_attr: u32,
        pub name: String,
    }

    impl SymbolBody {
        pub fn new(esdid: u32, kind: u8, name: &str) -> Self {
            Self {
                esdid,
                location: 0,
                kind,
                dup: 1,
                asm_type: "    ",
                len_attr: 0,
                name: name.to_string(),
            }
        }

        pub fn member(esdid: u32, name: &str, offset: u32, asm_type: &'static str, size: u32, dup: u32) -> Self {
            Self {
                location: offset,
                asm_type,
                len_attr: size,
                dup,
                ..Self::new(esdid, 0x0d, name)
            }
        }

        pub fn constant(esdid: u32, name: &str, value: i32) -> Self {
            Self {
                location: value as u32,
                ..Self::new(esdid, 0x0c, name)
            }
        }

        pub fn encode(&self) -> Vec<u8> {
            let name = ebcdic(&self.name);
            let mut tag = ebcdic(self.asm_type);
            tag.resize(4, 0x40);
            let mut body = vec![0u8; 50];
            body[0..4].copy_from_slice(&self.esdid.to_be_bytes());
            body[4..8].copy_from_slice(&1u32.to_be_bytes());
            body[8..12].copy_from_slice(&self.location.to_be_bytes());
            body[12] = self.kind;
            body[13..17].copy_from_slice(&self.dup.to_be_bytes());
            body[17] = 0xc6;
            body[18..22].copy_from_slice(&tag[..4]);
            body[26..30].copy_from_slice(&self.len_attr.to_be_bytes());
            body[42..46].copy_from_slice(&50u32.to_be_bytes());
            body[46..50].copy_from_slice(&(name.len() as u32).to_be_bytes());
            body.extend(name);
            body
        }
    }
}
