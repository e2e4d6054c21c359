//! Project descriptor kinds and name extraction.
//!
//! Name lookup never fails: every problem (unreadable file, malformed XML,
//! missing key) falls back to a name derived from the path.

use crate::core::UNKNOWN_PROJECT;
use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::path::Path;

static DEFAULT_PROJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""defaultProject"\s*:\s*"([^"]+)""#).unwrap());
static FIRST_PROJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""projects"\s*:\s*\{\s*"([^"]+)""#).unwrap());
static PACKAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""name"\s*:\s*"([^"]+)""#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DescriptorKind {
    /// MSBuild `*.csproj`
    CsProject,
    /// `angular.json` workspace manifest
    AngularWorkspace,
    /// `package.json`
    PackageManifest,
}

impl DescriptorKind {
    pub fn of(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.to_ascii_lowercase().ends_with(".csproj") {
            Some(Self::CsProject)
        } else if name == "angular.json" {
            Some(Self::AngularWorkspace)
        } else if name == "package.json" {
            Some(Self::PackageManifest)
        } else {
            None
        }
    }

    /// Lower wins when two descriptors share a directory
    pub fn priority(&self) -> u8 {
        match self {
            Self::CsProject => 0,
            Self::AngularWorkspace => 1,
            Self::PackageManifest => 2,
        }
    }
}

/// Human-readable name of the project declared by `path`
pub fn project_name(path: &Path, kind: DescriptorKind) -> String {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            return fallback_name(path, kind);
        }
    };

    let declared = match kind {
        DescriptorKind::CsProject => assembly_name(&content),
        DescriptorKind::AngularWorkspace => workspace_project(&content),
        DescriptorKind::PackageManifest => capture(&PACKAGE_NAME, &content),
    };

    declared.unwrap_or_else(|| {
        log::debug!("No declared name in {}, using fallback", path.display());
        fallback_name(path, kind)
    })
}

/// `AssemblyName` of the first `PropertyGroup`, if present and non-empty.
///
/// Element names are compared without namespace prefix, so legacy
/// MSBuild files with an `xmlns` declaration resolve too.
pub fn assembly_name(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut group_depth: Option<usize> = None;
    let mut in_name = false;
    let mut name = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let local = e.local_name();
                match group_depth {
                    None if local.as_ref() == b"PropertyGroup" => group_depth = Some(depth),
                    Some(group) if depth == group + 1 && local.as_ref() == b"AssemblyName" => {
                        in_name = true;
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                if group_depth.is_none() && e.local_name().as_ref() == b"PropertyGroup" {
                    return None;
                }
            }
            Ok(Event::Text(ref e)) if in_name => name.push_str(&e.unescape().ok()?),
            Ok(Event::CData(ref e)) if in_name => name.push_str(&String::from_utf8_lossy(e)),
            Ok(Event::End(_)) => {
                if in_name {
                    let trimmed = name.trim();
                    return (!trimmed.is_empty()).then(|| trimmed.to_string());
                }
                if group_depth == Some(depth) {
                    return None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}

/// `defaultProject`, or the first key of `projects` for workspaces that
/// no longer declare a default.
fn workspace_project(json: &str) -> Option<String> {
    capture(&DEFAULT_PROJECT, json).or_else(|| capture(&FIRST_PROJECT, json))
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// File stem for compiled projects, containing directory for web manifests
pub fn fallback_name(path: &Path, kind: DescriptorKind) -> String {
    let derived = match kind {
        DescriptorKind::CsProject => path.file_stem(),
        DescriptorKind::AngularWorkspace | DescriptorKind::PackageManifest => {
            path.parent().and_then(Path::file_name)
        }
    };
    match derived.and_then(|name| name.to_str()) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            log::warn!("Cannot derive a project name from {}", path.display());
            UNKNOWN_PROJECT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_of_path() {
        assert_eq!(
            DescriptorKind::of(Path::new("App/App.csproj")),
            Some(DescriptorKind::CsProject)
        );
        assert_eq!(
            DescriptorKind::of(Path::new("web/angular.json")),
            Some(DescriptorKind::AngularWorkspace)
        );
        assert_eq!(
            DescriptorKind::of(Path::new("web/package.json")),
            Some(DescriptorKind::PackageManifest)
        );
        assert_eq!(DescriptorKind::of(Path::new("web/tsconfig.json")), None);
    }

    #[test]
    fn test_assembly_name_from_first_group() {
        let xml = indoc! {r#"
            <Project Sdk="Microsoft.NET.Sdk">
              <PropertyGroup>
                <TargetFramework>net8.0</TargetFramework>
                <AssemblyName> MyApp </AssemblyName>
              </PropertyGroup>
              <PropertyGroup>
                <AssemblyName>Other</AssemblyName>
              </PropertyGroup>
            </Project>
        "#};
        assert_eq!(assembly_name(xml), Some("MyApp".to_string()));
    }

    #[test]
    fn test_assembly_name_only_in_later_group_is_ignored() {
        let xml = indoc! {"
            <Project>
              <PropertyGroup><OutputType>Exe</OutputType></PropertyGroup>
              <PropertyGroup><AssemblyName>Late</AssemblyName></PropertyGroup>
            </Project>
        "};
        assert_eq!(assembly_name(xml), None);
    }

    #[test]
    fn test_assembly_name_with_namespace() {
        let xml = r#"<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003"><PropertyGroup><AssemblyName>Legacy</AssemblyName></PropertyGroup></Project>"#;
        assert_eq!(assembly_name(xml), Some("Legacy".to_string()));
    }

    #[test]
    fn test_assembly_name_empty_or_malformed() {
        assert_eq!(
            assembly_name("<Project><PropertyGroup><AssemblyName></AssemblyName></PropertyGroup></Project>"),
            None
        );
        assert_eq!(assembly_name("<Project><PropertyGroup/></Project>"), None);
        assert_eq!(assembly_name("not xml at all <<"), None);
    }

    #[test]
    fn test_project_name_falls_back_to_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Broken.csproj");
        fs::write(&path, "<Project><PropertyGroup>").unwrap();
        assert_eq!(project_name(&path, DescriptorKind::CsProject), "Broken");
    }

    #[test]
    fn test_angular_workspace_names() {
        assert_eq!(
            workspace_project(r#"{ "defaultProject": "shop", "projects": { "admin": {} } }"#),
            Some("shop".to_string())
        );
        assert_eq!(
            workspace_project(r#"{ "version": 1, "projects": { "admin": {} } }"#),
            Some("admin".to_string())
        );
    }

    #[test]
    fn test_package_manifest_falls_back_to_directory() {
        let dir = TempDir::new().unwrap();
        let web = dir.path().join("storefront");
        fs::create_dir(&web).unwrap();
        let path = web.join("package.json");

        fs::write(&path, r#"{ "name": "@acme/store", "version": "1.0.0" }"#).unwrap();
        assert_eq!(project_name(&path, DescriptorKind::PackageManifest), "@acme/store");

        fs::write(&path, r#"{ "private": true }"#).unwrap();
        assert_eq!(project_name(&path, DescriptorKind::PackageManifest), "storefront");
    }
}
