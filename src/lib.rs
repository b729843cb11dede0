// Wed Oct 14 2026 - Alex

pub mod config;
pub mod engine;
pub mod output;
pub mod record;
pub mod structure;
pub mod symbol;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use engine::{Engine, Runner};
pub use output::{Emitter, NameSanitizer};
pub use record::{RecordError, RecordReader};
pub use structure::{LayoutSynthesizer, StructureRegistry};
pub use symbol::RecordInterpreter;
