//! `.srcmirror.toml` configuration: types, discovery and CLI overrides.

mod core;
mod loader;
mod overrides;

pub use self::core::{OutputConfig, SrcmirrorConfig};
pub use loader::{directory_ancestors, load_config, load_config_file, parse_config};
pub use overrides::ConfigOverrides;

pub const CONFIG_FILE_NAME: &str = ".srcmirror.toml";

/// Written by `srcmirror init`; every value shown is the default
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# srcmirror configuration

[filter]
# Set to false to skip the migrations folder named below
include_migrations = true
migrations_folder = "Migrations"
include_interfaces = true
include_tests = true
include_generated = true
# Additional folder names and filename globs to skip
extra_folders = []
extra_patterns = []

[scrub]
strip_docs = false
strip_regions = true
strip_empty_lines = false
optimize_whitespace = false

[output]
# "super-flat", "flat" or "structured"
layout = "structured"
respect_gitignore = false
"#;
