// Tue Oct 13 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub offset: u32,
    pub asm_type: String,
    pub size: u32,
    pub dup: u32,
}

impl Member {
    pub fn new(name: impl Into<String>, offset: u32, asm_type: &str, size: u32, dup: u32) -> Self {
        Self {
            name: name.into(),
            offset,
            asm_type: asm_type.trim().to_string(),
            size,
            dup,
        }
    }

    /// Bytes claimed when the member is laid out.
    pub fn extent(&self) -> u32 {
        self.size.wrapping_mul(self.dup)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ 0x{:04x}: {} size {} x {}",
            self.name, self.offset, self.asm_type, self.size, self.dup
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equ {
    pub esdid: Option<u32>,
    pub name: String,
    pub value: i32,
}

impl Equ {
    pub fn new(esdid: Option<u32>, name: impl Into<String>, value: i32) -> Self {
        Self {
            esdid,
            name: name.into(),
            value,
        }
    }
}

/// A structure assembled from records that may arrive in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DsectModel {
    pub esdid: u32,
    pub name: String,
    pub total_size: u32,
    pub members: Vec<Member>,
    pub equs: Vec<Equ>,
}

impl DsectModel {
    pub fn new(esdid: u32) -> Self {
        Self {
            esdid,
            ..Self::default()
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_total_size(&mut self, size: u32) {
        self.total_size = size;
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn add_equ(&mut self, equ: Equ) {
        self.equs.push(equ);
    }
}
