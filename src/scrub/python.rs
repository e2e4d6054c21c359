//! Python scanner.
//!
//! Python has no doc comments; documentation lives in docstrings, which the
//! lexer sees as ordinary triple-quoted literals. [`remove_docstrings`]
//! recognizes the ones that sit in docstring position. Region markers
//! (`# region`) are ordinary comments and go with the comment pass.

use super::escape::Escape;
use super::lexer::{
    lex_line, scan_carries, strip_comments, Carry, CommentClass, LiteralDelim, Piece, Syntax,
};
use super::text::{Document, Line};
use super::transforms;
use crate::core::ScrubConfig;
use once_cell::sync::Lazy;
use regex::Regex;

pub const SYNTAX: Syntax = Syntax {
    line_comment: Some("#"),
    doc_line_comment: None,
    block_comment: None,
    doc_block_opener: None,
    literals: &[
        LiteralDelim::multi_line("\"\"\"", "\"\"\"", Escape::Backslash),
        LiteralDelim::multi_line("'''", "'''", Escape::Backslash),
        LiteralDelim::single_line("\""),
        LiteralDelim::single_line("'"),
    ],
};

/// Statements whose trailing `:` opens a block that may hold a docstring
static BLOCK_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:async\s+)?(?:def|class|if|elif|else|for|while|with|try|except|finally|match|case)\b",
    )
    .unwrap()
});

/// String prefixes that still allow a literal to be a docstring
const DOCSTRING_PREFIXES: [char; 4] = ['r', 'R', 'u', 'U'];

pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    let mut doc = strip_comments(&SYNTAX, &Document::parse(text), CommentClass::Plain);

    if config.strip_docs {
        doc = remove_docstrings(&doc);
    }

    if config.strip_empty_lines {
        doc = transforms::remove_empty_lines(&SYNTAX, &doc);
    }

    // Indentation is syntax in Python, so only trailing whitespace goes
    if config.optimize_whitespace {
        doc = transforms::trim_trailing(&SYNTAX, &doc);
    }

    doc.render()
}

/// Remove triple-quoted strings that form the first statement of the module
/// or of a block. A body left empty by the removal gets a `pass`.
pub fn remove_docstrings(doc: &Document) -> Document {
    let lines = &doc.lines;
    let carries = scan_carries(&SYNTAX, lines);
    let depths = bracket_depths(lines, &carries);
    let mut out: Vec<Line> = Vec::with_capacity(lines.len());
    // Last non-blank line seen, as an index into `lines`
    let mut previous: Option<usize> = None;
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];

        let slot = docstring_slot(lines, &depths, previous, index);
        if carries[index].0 == Carry::Code && slot.is_some() {
            if let Some(end) = docstring_end(lines, &carries, index) {
                if let Some(Some(opener)) = slot {
                    if body_is_empty(lines, end + 1, indent_width(&lines[opener].text)) {
                        out.push(line.with_text(format!("{}pass", leading_whitespace(&line.text))));
                    }
                }
                previous = Some(end);
                index = end + 1;
                continue;
            }
        }

        if !line.is_blank() {
            previous = Some(index);
        }
        out.push(line.clone());
        index += 1;
    }

    doc.with_lines(out)
}

/// Whether `index` can hold a docstring: `Some(None)` at module start,
/// `Some(Some(opener))` as the first line of a block deeper than the
/// statement at `opener` that opened it.
fn docstring_slot(
    lines: &[Line],
    depths: &[usize],
    previous: Option<usize>,
    index: usize,
) -> Option<Option<usize>> {
    let Some(last) = previous else {
        return Some(None);
    };
    if depths[index] > 0 || !lines[last].text.trim_end().ends_with(':') {
        return None;
    }

    // A signature may span lines; the statement starts outside all brackets
    let opener = (0..=last).rev().find(|&i| depths[i] == 0)?;
    let opener_text = &lines[opener].text;
    (BLOCK_OPENER.is_match(opener_text)
        && indent_width(&lines[index].text) > indent_width(opener_text))
    .then_some(Some(opener))
}

/// Open bracket count at the start of each line, from code pieces only
fn bracket_depths(lines: &[Line], carries: &[(Carry, Carry)]) -> Vec<usize> {
    let mut depth = 0usize;
    lines
        .iter()
        .zip(carries)
        .map(|(line, &(carry, _))| {
            let start = depth;
            let (pieces, _) = lex_line(&SYNTAX, &line.text, carry);
            for piece in pieces {
                let Piece::Code(code) = piece else { continue };
                for ch in code.chars() {
                    match ch {
                        '(' | '[' | '{' => depth += 1,
                        ')' | ']' | '}' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                }
            }
            start
        })
        .collect()
}

/// Index of the line that closes a docstring starting at `start`, if the
/// line starts with a triple-quoted literal that is a whole statement.
fn docstring_end(lines: &[Line], carries: &[(Carry, Carry)], start: usize) -> Option<usize> {
    let (pieces, _) = lex_line(&SYNTAX, &lines[start].text, Carry::Code);
    let mut pieces = pieces.into_iter();

    let literal = match pieces.next()? {
        Piece::Code(prefix) if is_docstring_prefix(prefix) => pieces.next()?,
        other => other,
    };
    let Piece::Literal(text) = literal else {
        return None;
    };
    if !(text.starts_with("\"\"\"") || text.starts_with("'''")) {
        return None;
    }

    if !carries[start].1.in_literal() {
        return only_whitespace(pieces).then_some(start);
    }

    let end = (start + 1..lines.len()).find(|&i| !carries[i].1.in_literal())?;
    let (pieces, _) = lex_line(&SYNTAX, &lines[end].text, carries[end].0);
    let mut pieces = pieces.into_iter();
    pieces.next();
    only_whitespace(pieces).then_some(end)
}

fn is_docstring_prefix(code: &str) -> bool {
    let trimmed = code.trim_start();
    trimmed.is_empty() || (trimmed.len() == 1 && trimmed.starts_with(DOCSTRING_PREFIXES))
}

fn only_whitespace<'a>(mut pieces: impl Iterator<Item = Piece<'a>>) -> bool {
    pieces.all(|piece| matches!(piece, Piece::Code(code) if code.trim().is_empty()))
}

/// Whether nothing at a deeper indentation follows `from`
fn body_is_empty(lines: &[Line], from: usize, opener_indent: usize) -> bool {
    lines[from.min(lines.len())..]
        .iter()
        .find(|line| !line.is_blank())
        .map_or(true, |line| indent_width(&line.text) <= opener_indent)
}

fn indent_width(text: &str) -> usize {
    leading_whitespace(text).len()
}

fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - text.trim_start_matches([' ', '\t']).len()]
}
