// Tue Oct 13 2026 - Alex

use crate::record::error::RecordError;
use crate::record::types::RecordType;
use crate::utils::BinaryUtils;
use bitflags::bitflags;
use std::fmt;

pub const HEADER_LEN: usize = 12;
pub const LANGUAGE_ASSEMBLER: u8 = 16;
pub const ARCHITECTURE_LEVEL: u8 = 3;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeaderFlags: u8 {
        const CONTINUATION = 0x01;
        const LITTLE_ENDIAN = 0x02;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub language: u8,
    pub record_type: u16,
    pub architecture: u8,
    pub flags: HeaderFlags,
    pub edition: u8,
    pub body_len: u16,
}

impl RecordHeader {
    /// Decodes and validates a header. Checks run language, architecture,
    /// then record type, and the first failure is reported.
    pub fn parse(raw: &[u8; HEADER_LEN]) -> Result<Self, RecordError> {
        let flags = HeaderFlags::from_bits_truncate(raw[4]);
        let header = Self {
            language: raw[0],
            record_type: u16::from_be_bytes([raw[1], raw[2]]),
            architecture: raw[3],
            flags,
            edition: raw[5],
            body_len: Self::decode_len(raw, flags),
        };

        if header.language != LANGUAGE_ASSEMBLER {
            return Err(RecordError::UnexpectedLanguage(header.language));
        }
        if header.architecture != ARCHITECTURE_LEVEL {
            return Err(RecordError::UnexpectedArchitecture(header.architecture));
        }
        if !RecordType::is_known(header.record_type) {
            return Err(RecordError::UnknownRecordType(header.record_type));
        }

        Ok(header)
    }

    fn decode_len(raw: &[u8; HEADER_LEN], flags: HeaderFlags) -> u16 {
        let len = if flags.contains(HeaderFlags::LITTLE_ENDIAN) {
            BinaryUtils::read_u16_le(raw, 10)
        } else {
            BinaryUtils::read_u16_be(raw, 10)
        };
        len.unwrap_or(0)
    }

    pub fn is_continuation(&self) -> bool {
        self.flags.contains(HeaderFlags::CONTINUATION)
    }

    pub fn is_little_endian(&self) -> bool {
        self.flags.contains(HeaderFlags::LITTLE_ENDIAN)
    }

    pub fn kind(&self) -> Option<RecordType> {
        RecordType::lookup(self.record_type)
    }

    pub fn edition_matches(&self) -> bool {
        self.kind().map_or(false, |k| k.edition == self.edition)
    }
}

impl fmt::Display for RecordHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().map_or("?", |k| k.name);
        write!(
            f,
            "type 0x{:04x} ({}) edition {} len {}{}{}",
            self.record_type,
            name,
            self.edition,
            self.body_len,
            if self.is_little_endian() { " LE" } else { "" },
            if self.is_continuation() { " cont" } else { "" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::header_bytes;
    use crate::record::types::{ESD, SYMBOL};

    #[test]
    fn test_parse_big_endian_length() {
        let raw = header_bytes(SYMBOL, 0x01, 0x0102, false);
        let header = RecordHeader::parse(&raw).unwrap();
        assert_eq!(header.record_type, SYMBOL);
        assert_eq!(header.body_len, 0x0102);
        assert!(!header.is_little_endian());
        assert!(header.edition_matches());
    }

    #[test]
    fn test_parse_little_endian_length() {
        let raw = header_bytes(ESD, 0x01, 0x0102, true);
        assert_eq!(raw[10], 0x02);
        let header = RecordHeader::parse(&raw).unwrap();
        assert_eq!(header.body_len, 0x0102);
        assert!(header.is_little_endian());
    }

    #[test]
    fn test_continuation_flag() {
        let mut raw = header_bytes(ESD, 0x01, 4, false);
        raw[4] |= 0x01;
        let header = RecordHeader::parse(&raw).unwrap();
        assert!(header.is_continuation());
        assert!(!header.is_little_endian());
    }

    #[test]
    fn test_rejects_language() {
        let mut raw = header_bytes(SYMBOL, 1, 0, false);
        raw[0] = 15;
        assert!(matches!(RecordHeader::parse(&raw), Err(RecordError::UnexpectedLanguage(15))));
    }

    #[test]
    fn test_rejects_architecture() {
        let mut raw = header_bytes(SYMBOL, 1, 0, false);
        raw[3] = 4;
        assert!(matches!(RecordHeader::parse(&raw), Err(RecordError::UnexpectedArchitecture(4))));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let raw = header_bytes(0x0043, 1, 0, false);
        let err = RecordHeader::parse(&raw).unwrap_err();
        assert!(matches!(err, RecordError::UnknownRecordType(0x0043)));
        assert_eq!(err.category(), crate::record::ErrorCategory::Validation);
    }

    #[test]
    fn test_edition_mismatch_is_not_an_error() {
        let raw = header_bytes(SYMBOL, 7, 0, false);
        let header = RecordHeader::parse(&raw).unwrap();
        assert!(!header.edition_matches());
    }
}
