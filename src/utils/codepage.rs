// Tue Oct 13 2026 - Alex

//! EBCDIC (code page 1047) to ISO-8859-1 byte translation.

const EBCDIC_TO_LATIN1: [u8; 256] = [
    /* 00 */ 0x00, 0x01, 0x02, 0x03, 0x9c, 0x09, 0x86, 0x7f,
    /* 08 */ 0x97, 0x8d, 0x8e, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    /* 10 */ 0x10, 0x11, 0x12, 0x13, 0x9d, 0x0a, 0x08, 0x87,
    /* 18 */ 0x18, 0x19, 0x92, 0x8f, 0x1c, 0x1d, 0x1e, 0x1f,
    /* 20 */ 0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x17, 0x1b,
    /* 28 */ 0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x05, 0x06, 0x07,
    /* 30 */ 0x90, 0x91, 0x16, 0x93, 0x94, 0x95, 0x96, 0x04,
    /* 38 */ 0x98, 0x99, 0x9a, 0x9b, 0x14, 0x15, 0x9e, 0x1a,
    /* 40 */ 0x20, 0xa0, 0xe2, 0xe4, 0xe0, 0xe1, 0xe3, 0xe5,
    /* 48 */ 0xe7, 0xf1, 0xa2, 0x2e, 0x3c, 0x28, 0x2b, 0x7c,
    /* 50 */ 0x26, 0xe9, 0xea, 0xeb, 0xe8, 0xed, 0xee, 0xef,
    /* 58 */ 0xec, 0xdf, 0x21, 0x24, 0x2a, 0x29, 0x3b, 0x5e,
    /* 60 */ 0x2d, 0x2f, 0xc2, 0xc4, 0xc0, 0xc1, 0xc3, 0xc5,
    /* 68 */ 0xc7, 0xd1, 0xa6, 0x2c, 0x25, 0x5f, 0x3e, 0x3f,
    /* 70 */ 0xf8, 0xc9, 0xca, 0xcb, 0xc8, 0xcd, 0xce, 0xcf,
    /* 78 */ 0xcc, 0x60, 0x3a, 0x23, 0x40, 0x27, 0x3d, 0x22,
    /* 80 */ 0xd8, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
    /* 88 */ 0x68, 0x69, 0xab, 0xbb, 0xf0, 0xfd, 0xfe, 0xb1,
    /* 90 */ 0xb0, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70,
    /* 98 */ 0x71, 0x72, 0xaa, 0xba, 0xe6, 0xb8, 0xc6, 0xa4,
    /* a0 */ 0xb5, 0x7e, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78,
    /* a8 */ 0x79, 0x7a, 0xa1, 0xbf, 0xd0, 0x5b, 0xde, 0xae,
    /* b0 */ 0xac, 0xa3, 0xa5, 0xb7, 0xa9, 0xa7, 0xb6, 0xbc,
    /* b8 */ 0xbd, 0xbe, 0xdd, 0xa8, 0xaf, 0x5d, 0xb4, 0xd7,
    /* c0 */ 0x7b, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
    /* c8 */ 0x48, 0x49, 0xad, 0xf4, 0xf6, 0xf2, 0xf3, 0xf5,
    /* d0 */ 0x7d, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50,
    /* d8 */ 0x51, 0x52, 0xb9, 0xfb, 0xfc, 0xf9, 0xfa, 0xff,
    /* e0 */ 0x5c, 0xf7, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58,
    /* e8 */ 0x59, 0x5a, 0xb2, 0xd4, 0xd6, 0xd2, 0xd3, 0xd5,
    /* f0 */ 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
    /* f8 */ 0x38, 0x39, 0xb3, 0xdb, 0xdc, 0xd9, 0xda, 0x9f,
];

pub struct Codepage;

impl Codepage {
    pub fn translate_byte(byte: u8) -> u8 {
        EBCDIC_TO_LATIN1[byte as usize]
    }

    pub fn translate(bytes: &[u8]) -> Vec<u8> {
        bytes.iter().map(|&b| Self::translate_byte(b)).collect()
    }

    /// Translates and decodes as Latin-1, where every byte is its own code point.
    pub fn decode(bytes: &[u8]) -> String {
        bytes.iter().map(|&b| Self::translate_byte(b) as char).collect()
    }

    pub fn printable_ascii(byte: u8) -> char {
        if (0x20..0x7f).contains(&byte) {
            byte as char
        } else {
            '.'
        }
    }

    pub fn printable_ebcdic(byte: u8) -> char {
        Self::printable_ascii(Self::translate_byte(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_letters_and_digits() {
        // "ABC123" in EBCDIC
        let ebcdic = [0xc1, 0xc2, 0xc3, 0xf1, 0xf2, 0xf3];
        assert_eq!(Codepage::translate(&ebcdic), b"ABC123".to_vec());
        assert_eq!(Codepage::decode(&ebcdic), "ABC123");
    }

    #[test]
    fn test_translate_punctuation() {
        assert_eq!(Codepage::decode(&[0x40, 0x7c, 0x5b, 0x7b, 0x6d]), " @$#_");
    }

    #[test]
    fn test_translate_is_a_permutation() {
        let mut seen = [false; 256];
        for b in 0..=255u8 {
            let t = Codepage::translate_byte(b) as usize;
            assert!(!seen[t], "0x{:02x} produced twice", t);
            seen[t] = true;
        }
    }

    #[test]
    fn test_decode_high_bytes_as_latin1() {
        // 0x43 maps to 0xe4 (a-umlaut)
        assert_eq!(Codepage::decode(&[0x43]), "\u{e4}");
    }

    #[test]
    fn test_printable_columns() {
        assert_eq!(Codepage::printable_ascii(b'A'), 'A');
        assert_eq!(Codepage::printable_ascii(0x7f), '.');
        assert_eq!(Codepage::printable_ascii(0xc1), '.');
        assert_eq!(Codepage::printable_ebcdic(0xc1), 'A');
        assert_eq!(Codepage::printable_ebcdic(0x4a), '.');
    }
}
