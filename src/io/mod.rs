pub mod walker;

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Create the parent directory of `path` and write `content` to it
pub fn write_with_parents(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_file(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_with_parents_creates_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c.txt");
        write_with_parents(&target, "hello").unwrap();
        assert!(target.is_file());
        assert!(dir.path().join("a/b").is_dir());
        assert_eq!(read_file(&target).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_file(Path::new("/definitely/not/here.cs")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("here.cs"));
    }
}
