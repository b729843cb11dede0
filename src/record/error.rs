// Tue Oct 13 2026 - Alex

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Framing,
    Validation,
    Io,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Short record at offset {position}: expected {expected} bytes, received {received}")]
    ShortRead {
        position: u64,
        expected: usize,
        received: usize,
    },
    #[error("Record body size {size} > {capacity}")]
    CapacityExceeded { size: usize, capacity: usize },
    #[error("Language code {0} != 16")]
    UnexpectedLanguage(u8),
    #[error("Architecture level {0} != 3")]
    UnexpectedArchitecture(u8),
    #[error("Record type 0x{0:04x} not recognized")]
    UnknownRecordType(u16),
    #[error("Record 0x{record_type:04x} body too short for {field}: need {needed} bytes, have {available}")]
    TruncatedBody {
        record_type: u16,
        field: &'static str,
        needed: usize,
        available: usize,
    },
}

impl RecordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::Io,
            Self::ShortRead { .. } | Self::CapacityExceeded { .. } | Self::TruncatedBody { .. } => {
                ErrorCategory::Framing
            }
            Self::UnexpectedLanguage(_) | Self::UnexpectedArchitecture(_) | Self::UnknownRecordType(_) => {
                ErrorCategory::Validation
            }
        }
    }
}
