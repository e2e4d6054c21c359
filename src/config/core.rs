use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::convert::ConvertOptions;
use crate::core::{OutputLayout, ScrubConfig};
use crate::filter::ExclusionConfig;

/// Root configuration structure for srcmirror
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrcmirrorConfig {
    /// Which file groups take part in a run
    pub filter: ExclusionConfig,

    /// Optional transforms after comment stripping
    pub scrub: ScrubConfig,

    /// Output layout settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub layout: OutputLayout,
    /// Skip files matched by `.gitignore` during discovery
    pub respect_gitignore: bool,
}

impl SrcmirrorConfig {
    /// Combine with a destination into the options for one run
    pub fn into_options(self, destination: impl Into<PathBuf>) -> ConvertOptions {
        ConvertOptions {
            exclusion: self.filter,
            scrub: self.scrub,
            layout: self.output.layout,
            destination: destination.into(),
            respect_gitignore: self.output.respect_gitignore,
        }
    }
}
