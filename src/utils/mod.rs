// Tue Oct 13 2026 - Alex

pub mod binary;
pub mod codepage;
pub mod hexdump;
pub mod logging;

pub use binary::BinaryUtils;
pub use codepage::Codepage;
pub use hexdump::HexDump;
pub use logging::LoggingUtils;

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
