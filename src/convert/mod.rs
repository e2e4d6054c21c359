//! Conversion entry point: discover, filter, scrub, write, count.

use crate::core::{ConversionOutcome, Error, OutputLayout, Result, ScrubConfig, SourceUnit};
use crate::filter::{ExclusionConfig, ExclusionFilter};
use crate::io;
use crate::io::walker::find_source_files;
use crate::project::ProjectMapping;
use crate::scrub;
use std::path::{Path, PathBuf};

/// Everything a run needs besides the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub exclusion: ExclusionConfig,
    pub scrub: ScrubConfig,
    pub layout: OutputLayout,
    pub destination: PathBuf,
    pub respect_gitignore: bool,
}

impl ConvertOptions {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            exclusion: ExclusionConfig::default(),
            scrub: ScrubConfig::default(),
            layout: OutputLayout::default(),
            destination: destination.into(),
            respect_gitignore: false,
        }
    }
}

/// Convert every participating file below `source_root`.
///
/// Setup problems (source root not a directory, destination root cannot be
/// created, invalid exclusion pattern) abort before any file is touched.
/// Failures on individual files are recorded in the outcome and the run
/// continues. Finding no files yields an empty outcome, not an error.
pub fn convert(source_root: &Path, options: &ConvertOptions) -> Result<ConversionOutcome> {
    if !source_root.is_dir() {
        return Err(Error::setup(format!(
            "Source directory does not exist: {}",
            source_root.display()
        )));
    }
    std::fs::create_dir_all(&options.destination).map_err(|e| {
        Error::setup_io(
            format!(
                "Cannot create destination directory {}",
                options.destination.display()
            ),
            e,
        )
    })?;

    let filter = ExclusionFilter::new(&options.exclusion)?;
    let projects = ProjectMapping::discover(source_root)?;
    log::debug!("Resolved {} project descriptor(s)", projects.len());

    let files: Vec<PathBuf> = find_source_files(source_root, options.respect_gitignore)?
        .into_iter()
        .filter(|path| {
            let relative = path.strip_prefix(source_root).unwrap_or(path);
            filter.should_include(relative)
        })
        .collect();

    if files.is_empty() {
        log::info!("No files found under {}", source_root.display());
        return Ok(ConversionOutcome::new());
    }

    let mut outcome = ConversionOutcome::with_total(files.len());
    for path in &files {
        match convert_file(path, source_root, options, &projects) {
            Ok(destination) => {
                log::debug!("{} -> {}", path.display(), destination.display());
                outcome.record_success();
            }
            Err(e) => {
                log::warn!("Failed to convert {}: {}", path.display(), e);
                outcome.record_failure(format!("Error processing {}: {}", path.display(), e));
            }
        }
    }

    log::info!(
        "Converted {} of {} file(s), {} failed",
        outcome.succeeded,
        outcome.total,
        outcome.failed
    );
    Ok(outcome)
}

fn convert_file(
    path: &Path,
    source_root: &Path,
    options: &ConvertOptions,
    projects: &ProjectMapping,
) -> Result<PathBuf> {
    let unit = SourceUnit::read(path)?;
    let scrubbed = scrub::scrub_unit(&unit, &options.scrub)?;
    let destination = options
        .layout
        .destination_path(path, source_root, &options.destination, projects);
    io::write_with_parents(&destination, &scrubbed)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source_is_setup_error() {
        let dest = TempDir::new().unwrap();
        let options = ConvertOptions::new(dest.path());
        let err = convert(Path::new("/no/such/source/root"), &options).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_uncreatable_destination_is_setup_error() {
        let src = TempDir::new().unwrap();
        let blocker = src.path().join("taken");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let options = ConvertOptions::new(blocker.join("out"));
        let err = convert(src.path(), &options).unwrap_err();
        assert!(matches!(err, Error::Setup { .. }));
    }

    #[test]
    fn test_empty_tree_gives_zero_outcome() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(src.path().join("README.md"), "# nothing to convert").unwrap();

        let outcome = convert(src.path(), &ConvertOptions::new(dest.path())).unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_counted_not_fatal() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(src.path().join("Good.cs"), "class Good {} // c").unwrap();
        fs::write(src.path().join("Bad.cs"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let outcome = convert(src.path(), &ConvertOptions::new(dest.path())).unwrap();
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.succeeded, 1);
        assert_eq!(outcome.failed, 1);
        assert!(outcome.errors[0].starts_with("Error processing"));
        assert!(outcome.errors[0].contains("Bad.cs"));
        assert_eq!(
            fs::read_to_string(dest.path().join("Good.txt")).unwrap(),
            "class Good {}"
        );
    }
}
