//! Common type definitions used across the codebase

use super::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source languages with a dedicated scanner.
///
/// Variant order is the registration order: when several kinds could claim
/// a file, the first one whose capability matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    CFamily,
    TypeScript,
    Python,
    Html,
    Css,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::CFamily,
        SourceKind::TypeScript,
        SourceKind::Python,
        SourceKind::Html,
        SourceKind::Css,
    ];

    /// Filename suffix patterns this kind handles
    pub fn capabilities(&self) -> &'static [&'static str] {
        match self {
            SourceKind::CFamily => &["*.cs"],
            SourceKind::TypeScript => &["*.ts", "*.component.ts"],
            SourceKind::Python => &["*.py"],
            SourceKind::Html => &["*.html", "*.htm", "*.component.html"],
            SourceKind::Css => &["*.css", "*.scss", "*.component.css", "*.component.scss"],
        }
    }

    /// Capability predicate; suffixes compare case-insensitively.
    pub fn handles(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let name = name.to_ascii_lowercase();

        self.capabilities()
            .iter()
            .any(|pattern| name.ends_with(pattern.trim_start_matches('*')))
    }

    /// First kind, in registration order, that handles the path
    pub fn detect(path: &Path) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.handles(path))
    }

    pub fn for_path(path: &Path) -> Result<Self> {
        Self::detect(path).ok_or_else(|| Error::unsupported(path))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::CFamily => "C#",
            SourceKind::TypeScript => "TypeScript",
            SourceKind::Python => "Python",
            SourceKind::Html => "HTML",
            SourceKind::Css => "CSS",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A file path plus its raw text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub content: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a unit from disk, dropping a leading byte-order mark.
    pub fn read(path: &Path) -> Result<Self> {
        let content = crate::io::read_file(path)?;
        let content = match content.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => content,
        };
        Ok(Self::new(path, content))
    }
}

/// Which optional transforms run after comment stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    pub strip_docs: bool,
    pub strip_regions: bool,
    pub strip_empty_lines: bool,
    pub optimize_whitespace: bool,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            strip_docs: false,
            strip_regions: true,
            strip_empty_lines: false,
            optimize_whitespace: false,
        }
    }
}

impl ScrubConfig {
    /// Comment stripping only
    pub fn minimal() -> Self {
        Self {
            strip_docs: false,
            strip_regions: false,
            strip_empty_lines: false,
            optimize_whitespace: false,
        }
    }

    pub fn everything() -> Self {
        Self {
            strip_docs: true,
            strip_regions: true,
            strip_empty_lines: true,
            optimize_whitespace: true,
        }
    }
}

/// Directory strategy for converted files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// All files in one directory, prefixed with the project name
    SuperFlat,
    /// One directory per project
    Flat,
    /// Mirrors the source directory structure
    #[default]
    Structured,
}

impl std::fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputLayout::SuperFlat => "super-flat",
            OutputLayout::Flat => "flat",
            OutputLayout::Structured => "structured",
        };
        write!(f, "{name}")
    }
}
