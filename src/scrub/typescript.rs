//! TypeScript / Angular scanner.
//!
//! Region markers (`// #region`) are line comments, so the comment pass
//! removes them.

use super::escape::Escape;
use super::lexer::{strip_comments, CommentClass, LiteralDelim, Syntax};
use super::text::Document;
use super::transforms;
use crate::core::ScrubConfig;

pub const SYNTAX: Syntax = Syntax {
    line_comment: Some("//"),
    doc_line_comment: None,
    block_comment: Some(("/*", "*/")),
    doc_block_opener: Some("/**"),
    literals: &[
        LiteralDelim::multi_line("`", "`", Escape::Backslash),
        LiteralDelim::single_line("\""),
        LiteralDelim::single_line("'"),
    ],
};

pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    let mut doc = strip_comments(&SYNTAX, &Document::parse(text), CommentClass::Plain);

    if config.strip_docs {
        doc = strip_comments(&SYNTAX, &doc, CommentClass::Doc);
    }

    if config.strip_empty_lines {
        doc = transforms::remove_empty_lines(&SYNTAX, &doc);
    }

    if config.optimize_whitespace {
        doc = transforms::compact_code(&SYNTAX, &doc, false);
    }

    doc.render()
}
