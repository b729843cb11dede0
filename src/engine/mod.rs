// Tue Oct 13 2026 - Alex

pub mod core;
pub mod runner;

pub use self::core::{Engine, EngineState, ParseSummary};
pub use runner::Runner;
