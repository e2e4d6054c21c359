// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod core;
pub mod filter;
pub mod io;
pub mod layout;
pub mod project;
pub mod scrub;

// Re-export commonly used types
pub use crate::config::{ConfigOverrides, SrcmirrorConfig};
pub use crate::convert::{convert, ConvertOptions};
pub use crate::core::{
    ConversionOutcome, Error, OutputLayout, Result, ScrubConfig, SourceKind, SourceUnit,
};
pub use crate::filter::{ExclusionConfig, ExclusionFilter, ExclusionRule};
pub use crate::project::{is_project_root, ProjectMapping};
pub use crate::scrub::{scrub, scrub_unit};
