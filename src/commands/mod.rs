//! CLI command implementations.
//!
//! - **convert**: mirror a source tree as scrubbed text files
//! - **init**: write a default `.srcmirror.toml`

pub mod convert;
pub mod init;

pub use convert::{handle_convert, render_summary, ConvertConfig};
pub use init::init_config;
