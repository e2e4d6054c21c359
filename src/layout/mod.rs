//! Destination path strategies.
//!
//! `Flat` and `SuperFlat` drop the source subdirectories, so two files with
//! the same name inside one project map to the same destination and the
//! later write wins. Use `Structured` when every file must be kept.

use crate::core::{OutputLayout, OUTPUT_EXTENSION};
use crate::project::ProjectMapping;
use std::path::{Path, PathBuf};

impl OutputLayout {
    /// Where `source_file` is written. Pure: depends on the arguments only.
    pub fn destination_path(
        &self,
        source_file: &Path,
        source_root: &Path,
        dest_root: &Path,
        projects: &ProjectMapping,
    ) -> PathBuf {
        match self {
            OutputLayout::Structured => {
                let relative = pathdiff::diff_paths(source_file, source_root)
                    .filter(|rel| !rel.starts_with(".."))
                    .unwrap_or_else(|| file_name(source_file).into());
                dest_root.join(relative).with_extension(OUTPUT_EXTENSION)
            }
            OutputLayout::Flat => {
                let project = sanitize_segment(projects.project_name_for(source_file));
                dest_root.join(project).join(output_file_name(source_file))
            }
            OutputLayout::SuperFlat => {
                let project = sanitize_segment(projects.project_name_for(source_file));
                dest_root.join(format!("{}.{}", project, output_file_name(source_file)))
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name with its last extension replaced by the output extension
fn output_file_name(path: &Path) -> String {
    Path::new(&file_name(path))
        .with_extension(OUTPUT_EXTENSION)
        .to_string_lossy()
        .into_owned()
}

/// Make a project name safe to use as a single path segment
pub fn sanitize_segment(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UNKNOWN_PROJECT;

    fn fixture() -> ProjectMapping {
        let mut projects = ProjectMapping::new();
        projects.insert("/root/App/App.csproj", "MyApp");
        projects
    }

    fn destination(layout: OutputLayout, file: &str) -> PathBuf {
        layout.destination_path(
            Path::new(file),
            Path::new("/root"),
            Path::new("dest"),
            &fixture(),
        )
    }

    #[test]
    fn test_each_layout_for_shared_fixture() {
        assert_eq!(
            destination(OutputLayout::SuperFlat, "/root/App/Foo.cs"),
            PathBuf::from("dest/MyApp.Foo.txt")
        );
        assert_eq!(
            destination(OutputLayout::Flat, "/root/App/Foo.cs"),
            PathBuf::from("dest/MyApp/Foo.txt")
        );
        assert_eq!(
            destination(OutputLayout::Structured, "/root/App/Foo.cs"),
            PathBuf::from("dest/App/Foo.txt")
        );
    }

    #[test]
    fn test_composed_suffix_keeps_inner_dots() {
        assert_eq!(
            destination(OutputLayout::Structured, "/root/web/app.component.ts"),
            PathBuf::from("dest/web/app.component.txt")
        );
        assert_eq!(
            destination(OutputLayout::Flat, "/root/web/app.component.ts"),
            PathBuf::from(format!("dest/{UNKNOWN_PROJECT}/app.component.txt"))
        );
    }

    #[test]
    fn test_flat_layouts_collide_on_same_name() {
        let a = destination(OutputLayout::Flat, "/root/App/Models/User.cs");
        let b = destination(OutputLayout::Flat, "/root/App/Views/User.cs");
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_names_are_sanitized() {
        let mut projects = ProjectMapping::new();
        projects.insert("/root/web/package.json", "@acme/store");
        let path = OutputLayout::SuperFlat.destination_path(
            Path::new("/root/web/main.ts"),
            Path::new("/root"),
            Path::new("dest"),
            &projects,
        );
        assert_eq!(path, PathBuf::from("dest/@acme_store.main.txt"));
    }

    #[test]
    fn test_file_outside_root_falls_back_to_name() {
        assert_eq!(
            destination(OutputLayout::Structured, "/elsewhere/Foo.cs"),
            PathBuf::from("dest/Foo.txt")
        );
    }
}
