// Tue Oct 13 2026 - Alex

pub mod emitter;
pub mod error;
pub mod formatter;
pub mod naming;

pub use emitter::Emitter;
pub use error::{FormatError, RuleError};
pub use formatter::ExternalFormatter;
pub use naming::{to_identifier, NameRules, NameSanitizer, RenameRule};
