// Tue Oct 13 2026 - Alex

use crate::structure::alignment::Alignment;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Byte,
    Bytes(u32),
    U16,
    U32,
    U64,
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldType {
    pub element: ElementType,
    /// `None` for a bare element, `Some(n)` for an `n`-element array.
    pub count: Option<u32>,
}

impl ElementType {
    /// Opaque rendering used whenever no numeric type applies.
    pub fn opaque(size: u32) -> Self {
        if size > 1 {
            Self::Bytes(size)
        } else {
            Self::Byte
        }
    }

    pub fn infer(offset: u32, size: u32, asm_type: &str) -> Self {
        if !Alignment::is_natural(offset, size) {
            return Self::opaque(size);
        }
        match (size, asm_type) {
            (2, "H") | (2, "y") => Self::U16,
            (4, "F") | (4, "A") => Self::U32,
            (8, "D") => Self::U64,
            (8, "AD") => Self::Pointer,
            _ => Self::opaque(size),
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer)
    }

    pub fn go_name(&self) -> String {
        match self {
            Self::Byte => "byte".to_string(),
            Self::Bytes(n) => format!("[{}]byte", n),
            Self::U16 => "uint16".to_string(),
            Self::U32 => "uint32".to_string(),
            Self::U64 => "uint64".to_string(),
            Self::Pointer => "unsafe.Pointer".to_string(),
        }
    }
}

impl FieldType {
    pub fn infer(offset: u32, size: u32, dup: u32, asm_type: &str) -> Self {
        Self {
            element: ElementType::infer(offset, size, asm_type),
            count: if dup == 1 { None } else { Some(dup) },
        }
    }

    pub fn go_name(&self) -> String {
        match self.count {
            None => self.element.go_name(),
            Some(n) => format!("[{}]{}", n, self.element.go_name()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.go_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_fullword() {
        assert_eq!(ElementType::infer(4, 4, "F"), ElementType::U32);
        assert_eq!(ElementType::infer(0, 4, "A"), ElementType::U32);
    }

    #[test]
    fn test_misaligned_fullword_is_opaque() {
        assert_eq!(ElementType::infer(2, 4, "F"), ElementType::Bytes(4));
    }

    #[test]
    fn test_odd_size_is_opaque_anywhere() {
        assert_eq!(ElementType::infer(0, 3, "F"), ElementType::Bytes(3));
        assert_eq!(ElementType::infer(3, 3, "C"), ElementType::Bytes(3));
    }

    #[test]
    fn test_halfword_and_doubleword_tags() {
        assert_eq!(ElementType::infer(2, 2, "H"), ElementType::U16);
        assert_eq!(ElementType::infer(2, 2, "y"), ElementType::U16);
        assert_eq!(ElementType::infer(8, 8, "D"), ElementType::U64);
        assert_eq!(ElementType::infer(16, 8, "AD"), ElementType::Pointer);
        assert_eq!(ElementType::infer(4, 8, "D"), ElementType::Bytes(8));
    }

    #[test]
    fn test_tag_must_match_size() {
        assert_eq!(ElementType::infer(0, 4, "H"), ElementType::Bytes(4));
        assert_eq!(ElementType::infer(0, 2, "F"), ElementType::Bytes(2));
        assert_eq!(ElementType::infer(0, 1, "C"), ElementType::Byte);
        assert_eq!(ElementType::infer(0, 0, "C"), ElementType::Byte);
    }

    #[test]
    fn test_duplication_wraps_in_array() {
        assert_eq!(FieldType::infer(0, 4, 1, "F").go_name(), "uint32");
        assert_eq!(FieldType::infer(0, 4, 3, "F").go_name(), "[3]uint32");
        assert_eq!(FieldType::infer(0, 8, 0, "AD").go_name(), "[0]unsafe.Pointer");
        assert_eq!(FieldType::infer(1, 5, 2, "C").go_name(), "[2][5]byte");
        assert_eq!(FieldType::infer(1, 1, 10, "C").to_string(), "[10]byte");
    }
}
