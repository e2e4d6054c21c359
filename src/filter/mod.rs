//! Decides which discovered files take part in a conversion.
//!
//! The rule set is built once from an [`ExclusionConfig`] and never changes
//! afterwards. Folder rules are checked before filename patterns.

pub mod glob;

use crate::core::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Build output, IDE state, version control and package caches
pub const BASE_EXCLUDED_FOLDERS: &[&str] = &[
    ".git",
    ".vs",
    ".vscode",
    ".idea",
    "bin",
    "obj",
    "packages",
    "node_modules",
    "dist",
    ".angular",
    "__pycache__",
];

const TEST_FOLDERS: &[&str] = &["Tests", "Test", "__tests__"];
const TEST_PATTERNS: &[&str] = &[
    "*Test*.cs",
    "*Tests*.cs",
    "*.spec.ts",
    "*.test.ts",
    "test_*.py",
    "*_test.py",
];
const INTERFACE_PATTERNS: &[&str] = &["I*.cs", "*.interface.ts"];
const GENERATED_PATTERNS: &[&str] = &["*.g.cs", "*.g.i.cs", "*.generated.cs", "*.Designer.cs"];

/// Which optional file groups participate in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionConfig {
    pub include_migrations: bool,
    pub migrations_folder: String,
    pub include_interfaces: bool,
    pub include_tests: bool,
    pub include_generated: bool,
    /// Additional folder names to skip
    pub extra_folders: Vec<String>,
    /// Additional filename globs to skip
    pub extra_patterns: Vec<String>,
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        Self {
            include_migrations: true,
            migrations_folder: "Migrations".to_string(),
            include_interfaces: true,
            include_tests: true,
            include_generated: true,
            extra_folders: Vec::new(),
            extra_patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ExclusionRule {
    /// Exact, case-sensitive match against a directory segment
    Folder(String),
    /// Filename glob together with its compiled matcher
    Pattern { glob: String, regex: Regex },
}

impl ExclusionRule {
    pub fn pattern(glob: &str) -> Result<Self> {
        Ok(Self::Pattern {
            glob: glob.to_string(),
            regex: glob::compile(glob)?,
        })
    }

    /// Whether this rule rejects a file with the given directory segments
    /// and file name
    fn excludes(&self, segments: &[&str], name: Option<&str>) -> bool {
        match self {
            ExclusionRule::Folder(folder) => segments.contains(&folder.as_str()),
            ExclusionRule::Pattern { regex, .. } => name.is_some_and(|n| regex.is_match(n)),
        }
    }
}

/// Ordered rule set: every folder rule precedes every pattern rule
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    rules: Vec<ExclusionRule>,
}

impl ExclusionFilter {
    /// Build the rule set. Fails only if an extra pattern does not compile.
    pub fn new(config: &ExclusionConfig) -> Result<Self> {
        let mut folders: Vec<String> =
            BASE_EXCLUDED_FOLDERS.iter().map(|f| f.to_string()).collect();
        let mut globs: Vec<&str> = Vec::new();

        if !config.include_migrations && !config.migrations_folder.is_empty() {
            folders.push(config.migrations_folder.clone());
        }
        if !config.include_interfaces {
            globs.extend(INTERFACE_PATTERNS);
        }
        if !config.include_tests {
            folders.extend(TEST_FOLDERS.iter().map(|f| f.to_string()));
            globs.extend(TEST_PATTERNS);
        }
        if !config.include_generated {
            globs.extend(GENERATED_PATTERNS);
        }
        folders.extend(config.extra_folders.iter().cloned());
        globs.extend(config.extra_patterns.iter().map(String::as_str));

        let mut rules: Vec<ExclusionRule> = folders.into_iter().map(ExclusionRule::Folder).collect();
        for glob in globs {
            rules.push(ExclusionRule::pattern(glob)?);
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }

    /// Whether `path` survives both the folder and the filename rules.
    ///
    /// Pass a path relative to the source root so that the root's own
    /// ancestors never match a folder rule.
    pub fn should_include(&self, path: &Path) -> bool {
        let segments: Vec<&str> = path
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .collect();
        let name = path.file_name().and_then(|n| n.to_str());

        match self.rules.iter().find(|rule| rule.excludes(&segments, name)) {
            Some(ExclusionRule::Folder(folder)) => {
                log::debug!("Excluding {} (folder {})", path.display(), folder);
                false
            }
            Some(ExclusionRule::Pattern { glob, .. }) => {
                log::debug!("Excluding {} (pattern {})", path.display(), glob);
                false
            }
            None => true,
        }
    }
}
