use crate::core::{Error, Result, SourceKind};
use crate::filter::BASE_EXCLUDED_FOLDERS;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Recursive file discovery below a root directory.
///
/// Build and package folders are pruned during the walk. Results come back
/// sorted by path so runs are reproducible.
pub struct FileWalker {
    root: PathBuf,
    kinds: Vec<SourceKind>,
    skip_folders: Vec<String>,
    respect_gitignore: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            kinds: SourceKind::ALL.to_vec(),
            skip_folders: BASE_EXCLUDED_FOLDERS.iter().map(|f| f.to_string()).collect(),
            respect_gitignore: false,
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<SourceKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_skip_folders(mut self, folders: Vec<String>) -> Self {
        self.skip_folders = folders;
        self
    }

    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Every file some selected scanner can handle
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        self.walk_matching(|path| self.kinds.iter().any(|kind| kind.handles(path)))
    }

    /// Every file for which `keep` returns true.
    ///
    /// Unreadable entries below the root are logged and skipped; only a
    /// root that is not a directory is an error.
    pub fn walk_matching(&self, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::setup(format!(
                "Source path is not a directory: {}",
                self.root.display()
            )));
        }

        let skip = self.skip_folders.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .git_global(false)
            .require_git(false)
            .parents(self.respect_gitignore)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && skip.iter().any(|f| entry.file_name() == f.as_str()))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && keep(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Convertible source files below `root`
pub fn find_source_files(root: &Path, respect_gitignore: bool) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .respect_gitignore(respect_gitignore)
        .walk()
}
