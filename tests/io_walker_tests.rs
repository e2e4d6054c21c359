use srcmirror::core::SourceKind;
use srcmirror::io::walker::FileWalker;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a test directory structure
fn create_test_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path();

    fs::create_dir_all(base_path.join("App/Models")).unwrap();
    fs::write(base_path.join("App/Program.cs"), "class Program {}").unwrap();
    fs::write(base_path.join("App/Models/User.cs"), "class User {}").unwrap();
    fs::write(base_path.join("App/App.csproj"), "<Project/>").unwrap();

    fs::create_dir_all(base_path.join("web/src/app")).unwrap();
    fs::write(base_path.join("web/src/app/app.component.ts"), "export class A {}").unwrap();
    fs::write(base_path.join("web/src/app/app.component.html"), "<p></p>").unwrap();
    fs::write(base_path.join("web/src/styles.scss"), ".a {}").unwrap();
    fs::write(base_path.join("tools.py"), "x = 1").unwrap();

    // Files no scanner handles
    fs::write(base_path.join("README.md"), "# Readme").unwrap();
    fs::write(base_path.join("web/package.json"), "{}").unwrap();

    // Build output and package caches
    fs::create_dir_all(base_path.join("App/obj/Debug")).unwrap();
    fs::write(base_path.join("App/obj/Debug/Gen.cs"), "class Gen {}").unwrap();
    fs::create_dir_all(base_path.join("web/node_modules/lib")).unwrap();
    fs::write(base_path.join("web/node_modules/lib/index.ts"), "export {}").unwrap();

    temp_dir
}

fn relative(root: &TempDir, files: Vec<PathBuf>) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_walk_finds_all_supported_files() {
    let temp_dir = create_test_directory();
    let files = FileWalker::new(temp_dir.path().to_path_buf()).walk().unwrap();

    assert_eq!(
        relative(&temp_dir, files),
        vec![
            "App/Models/User.cs",
            "App/Program.cs",
            "tools.py",
            "web/src/app/app.component.html",
            "web/src/app/app.component.ts",
            "web/src/styles.scss",
        ]
    );
}

#[test]
fn test_walk_filters_by_kind() {
    let temp_dir = create_test_directory();
    let files = FileWalker::new(temp_dir.path().to_path_buf())
        .with_kinds(vec![SourceKind::CFamily])
        .walk()
        .unwrap();

    assert_eq!(files.len(), 2);
    for file in &files {
        assert_eq!(file.extension().unwrap().to_string_lossy(), "cs");
    }
}

#[test]
fn test_walk_with_custom_skip_folders() {
    let temp_dir = create_test_directory();
    let files = FileWalker::new(temp_dir.path().to_path_buf())
        .with_kinds(vec![SourceKind::CFamily])
        .with_skip_folders(vec!["Models".to_string()])
        .walk()
        .unwrap();

    // obj is no longer skipped, Models is
    assert_eq!(
        relative(&temp_dir, files),
        vec!["App/Program.cs", "App/obj/Debug/Gen.cs"]
    );
}

#[test]
fn test_walk_respects_gitignore_when_asked() {
    let temp_dir = create_test_directory();
    fs::write(temp_dir.path().join(".gitignore"), "tools.py\n").unwrap();

    let all = FileWalker::new(temp_dir.path().to_path_buf())
        .with_kinds(vec![SourceKind::Python])
        .walk()
        .unwrap();
    assert_eq!(all.len(), 1);

    let ignored = FileWalker::new(temp_dir.path().to_path_buf())
        .with_kinds(vec![SourceKind::Python])
        .respect_gitignore(true)
        .walk()
        .unwrap();
    assert!(ignored.is_empty());
}

#[test]
fn test_walk_matching_custom_predicate() {
    let temp_dir = create_test_directory();
    let files = FileWalker::new(temp_dir.path().to_path_buf())
        .walk_matching(|path| path.extension().is_some_and(|e| e == "csproj"))
        .unwrap();
    assert_eq!(relative(&temp_dir, files), vec!["App/App.csproj"]);
}

#[test]
fn test_walk_nonexistent_root_is_error() {
    let result = FileWalker::new(PathBuf::from("/this/path/does/not/exist")).walk();
    assert!(result.is_err());
}
