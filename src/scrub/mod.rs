//! Comment stripping and text transforms for every supported language.
//!
//! Each scanner module exposes a `scrub(text, config)` function with the same
//! pipeline order: comments, documentation, regions, empty lines, whitespace.
//! Scanners never fail; malformed input degrades to "unterminated to end of
//! file".

pub mod c_family;
pub mod css;
pub mod escape;
pub mod html;
pub mod lexer;
pub mod python;
pub mod text;
pub mod transforms;
pub mod typescript;

use crate::core::{Result, ScrubConfig, SourceKind, SourceUnit};

/// Run the scanner for `kind` over `text`
pub fn scrub(kind: SourceKind, text: &str, config: &ScrubConfig) -> String {
    match kind {
        SourceKind::CFamily => c_family::scrub(text, config),
        SourceKind::TypeScript => typescript::scrub(text, config),
        SourceKind::Python => python::scrub(text, config),
        SourceKind::Html => html::scrub(text, config),
        SourceKind::Css => css::scrub(text, config),
    }
}

/// Pick the scanner from the unit's path and scrub its content.
///
/// Fails with `UnsupportedFileType` when no scanner claims the path.
pub fn scrub_unit(unit: &SourceUnit, config: &ScrubConfig) -> Result<String> {
    let kind = SourceKind::for_path(&unit.path)?;
    log::debug!("Scrubbing {} as {}", unit.path.display(), kind);
    Ok(scrub(kind, &unit.content, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_dispatch_by_extension() {
        let unit = SourceUnit::new("app/main.py", "x = 1  # note\n");
        assert_eq!(scrub_unit(&unit, &ScrubConfig::minimal()).unwrap(), "x = 1\n");

        let unit = SourceUnit::new("app/app.component.html", "<!-- c --><b></b>");
        assert_eq!(scrub_unit(&unit, &ScrubConfig::minimal()).unwrap(), "<b></b>");
    }

    #[test]
    fn test_unsupported_extension() {
        let unit = SourceUnit::new("README.md", "# title");
        let err = scrub_unit(&unit, &ScrubConfig::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { .. }));
    }

    #[test]
    fn test_idempotent_on_sample_inputs() {
        let samples = [
            (SourceKind::CFamily, "int a; // x\n/* y */\nvar s = @\"//\";\n"),
            (SourceKind::TypeScript, "let t = `/*`; // c\n"),
            (SourceKind::Python, "def f():\n    \"\"\"d\"\"\"\n    return 1  # r\n"),
            (SourceKind::Html, "<a><!-- c --></a>\n"),
            (SourceKind::Css, ".a{}/* c */\n"),
        ];
        let config = ScrubConfig::everything();
        for (kind, input) in samples {
            let once = scrub(kind, input, &config);
            assert_eq!(scrub(kind, &once, &config), once, "{kind}");
        }
    }
}
