//! Maps source files to the project that owns them.

pub mod descriptor;

use crate::core::{Result, UNKNOWN_PROJECT};
use crate::io::walker::FileWalker;
use descriptor::DescriptorKind;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Descriptor path to project name, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMapping {
    projects: BTreeMap<PathBuf, String>,
}

impl ProjectMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a name from every descriptor. Never fails.
    pub fn resolve<P: AsRef<Path>>(descriptors: &[P]) -> Self {
        let mut mapping = Self::new();
        for path in descriptors {
            let path = path.as_ref();
            if let Some(kind) = DescriptorKind::of(path) {
                let name = descriptor::project_name(path, kind);
                log::debug!("Project {} declared by {}", name, path.display());
                mapping.insert(path, name);
            }
        }
        mapping
    }

    /// Find and resolve every descriptor below `root`, skipping build and
    /// package folders.
    pub fn discover(root: &Path) -> Result<Self> {
        let descriptors = FileWalker::new(root.to_path_buf())
            .walk_matching(|path| DescriptorKind::of(path).is_some())?;
        Ok(Self::resolve(&descriptors))
    }

    pub fn insert(&mut self, descriptor: impl Into<PathBuf>, name: impl Into<String>) {
        self.projects.insert(descriptor.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.projects
            .iter()
            .map(|(path, name)| (path.as_path(), name.as_str()))
    }

    /// Descriptor whose directory is the deepest ancestor of `file`.
    ///
    /// Directories compare by whole components, so `App` does not own
    /// `AppTests/x.cs`. Descriptors sharing a directory are ranked by kind
    /// (`.csproj`, then `angular.json`, then `package.json`) and then by
    /// path, which keeps the choice deterministic.
    pub fn owner(&self, file: &Path) -> Option<(&Path, &str)> {
        self.iter()
            .filter_map(|(descriptor, name)| {
                let dir = descriptor.parent()?;
                file.starts_with(dir).then_some((dir, descriptor, name))
            })
            .min_by_key(|(dir, descriptor, _)| {
                let priority = DescriptorKind::of(descriptor).map_or(u8::MAX, |k| k.priority());
                (Reverse(dir.components().count()), priority, *descriptor)
            })
            .map(|(_, descriptor, name)| (descriptor, name))
    }

    /// Owning project's name, or the placeholder when nothing owns the file
    pub fn project_name_for(&self, file: &Path) -> &str {
        self.owner(file).map_or(UNKNOWN_PROJECT, |(_, name)| name)
    }
}

/// Whether `dir` directly contains a solution file, an Angular workspace
/// or a package manifest.
pub fn is_project_root(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        name.to_ascii_lowercase().ends_with(".sln")
            || name == "angular.json"
            || name == "package.json"
    })
}
