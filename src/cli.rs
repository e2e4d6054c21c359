use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::core::OutputLayout;

#[derive(Parser, Debug)]
#[command(name = "srcmirror")]
#[command(
    about = "Mirror C#, Angular and Python source trees as comment-free text files",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a source tree into plain-text mirrors
    Convert {
        /// Solution or workspace directory to convert
        source: PathBuf,

        /// Destination directory for the text files
        destination: PathBuf,

        /// Directory strategy for output files
        #[arg(short, long, value_enum)]
        layout: Option<LayoutArg>,

        /// Skip the migrations folder
        #[arg(long)]
        exclude_migrations: bool,

        /// Name of the migrations folder
        #[arg(long, value_name = "NAME")]
        migrations_folder: Option<String>,

        /// Skip interface files (I*.cs, *.interface.ts)
        #[arg(long)]
        exclude_interfaces: bool,

        /// Skip test folders and test files
        #[arg(long)]
        exclude_tests: bool,

        /// Skip generated files (*.g.cs, *.Designer.cs, ...)
        #[arg(long)]
        exclude_generated: bool,

        /// Remove documentation comments and docstrings
        #[arg(long)]
        strip_docs: bool,

        /// Keep C# #region/#endregion lines
        #[arg(long)]
        keep_regions: bool,

        /// Remove blank lines
        #[arg(long)]
        strip_empty_lines: bool,

        /// Collapse redundant whitespace
        #[arg(long)]
        optimize_whitespace: bool,

        /// Skip files ignored by .gitignore
        #[arg(long)]
        respect_gitignore: bool,

        /// Configuration file (defaults to the nearest .srcmirror.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Summary format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Convert even if the source has no .sln, angular.json or package.json
        #[arg(long)]
        allow_any_dir: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a srcmirror configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Every file in one directory, prefixed with its project name
    SuperFlat,
    /// One directory per project
    Flat,
    /// Mirror the source directory structure
    Structured,
}

impl From<LayoutArg> for OutputLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::SuperFlat => OutputLayout::SuperFlat,
            LayoutArg::Flat => OutputLayout::Flat,
            LayoutArg::Structured => OutputLayout::Structured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl Commands {
    /// Config overrides carried by a `convert` invocation
    pub fn overrides(&self) -> Option<ConfigOverrides> {
        let Commands::Convert {
            layout,
            exclude_migrations,
            migrations_folder,
            exclude_interfaces,
            exclude_tests,
            exclude_generated,
            strip_docs,
            keep_regions,
            strip_empty_lines,
            optimize_whitespace,
            respect_gitignore,
            ..
        } = self
        else {
            return None;
        };

        Some(ConfigOverrides {
            layout: layout.map(OutputLayout::from),
            exclude_migrations: *exclude_migrations,
            migrations_folder: migrations_folder.clone(),
            exclude_interfaces: *exclude_interfaces,
            exclude_tests: *exclude_tests,
            exclude_generated: *exclude_generated,
            strip_docs: *strip_docs,
            keep_regions: *keep_regions,
            strip_empty_lines: *strip_empty_lines,
            optimize_whitespace: *optimize_whitespace,
            respect_gitignore: *respect_gitignore,
        })
    }
}
