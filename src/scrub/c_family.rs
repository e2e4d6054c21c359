//! C# scanner.

use super::escape::Escape;
use super::lexer::{strip_comments, CommentClass, LiteralDelim, Syntax};
use super::text::Document;
use super::transforms::{self, RegionMarkers};
use crate::core::ScrubConfig;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SYNTAX: Syntax = Syntax {
    line_comment: Some("//"),
    doc_line_comment: Some("///"),
    block_comment: Some(("/*", "*/")),
    doc_block_opener: Some("/**"),
    literals: &[
        LiteralDelim::multi_line("\"\"\"", "\"\"\"", Escape::None),
        LiteralDelim::multi_line("@$\"", "\"", Escape::Doubled),
        LiteralDelim::multi_line("$@\"", "\"", Escape::Doubled),
        LiteralDelim::multi_line("@\"", "\"", Escape::Doubled),
        LiteralDelim::single_line("\""),
        LiteralDelim::single_line("'"),
    ],
};

static REGION_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#region\b").unwrap());
static REGION_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#endregion\b").unwrap());

pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    let mut doc = strip_comments(&SYNTAX, &Document::parse(text), CommentClass::Plain);

    if config.strip_docs {
        doc = strip_comments(&SYNTAX, &doc, CommentClass::Doc);
    }

    if config.strip_regions {
        let markers = RegionMarkers {
            start: &REGION_START,
            end: &REGION_END,
        };
        doc = transforms::remove_regions(&SYNTAX, &doc, &markers);
    }

    if config.strip_empty_lines {
        doc = transforms::remove_empty_lines(&SYNTAX, &doc);
    }

    if config.optimize_whitespace {
        doc = transforms::compact_code(&SYNTAX, &doc, true);
    }

    doc.render()
}
