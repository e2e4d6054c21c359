pub mod errors;
pub mod outcome;
pub mod types;

pub use errors::{Error, Result};
pub use outcome::ConversionOutcome;
pub use types::{OutputLayout, ScrubConfig, SourceKind, SourceUnit};

/// Extension given to every converted file
pub const OUTPUT_EXTENSION: &str = "txt";

/// Project name used when no descriptor owns a file
pub const UNKNOWN_PROJECT: &str = "Unknown";
