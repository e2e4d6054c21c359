//! Optional transforms applied after comment stripping.
//!
//! All of them consult the lexer carries, so a line (or line tail) that lies
//! inside a multi-line literal is never rewritten.

use super::lexer::{lex_line, scan_carries, Carry, Piece, Syntax};
use super::text::{Document, Line};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static PUNCTUATION_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*([(){}\[\],;:])[ \t]*").unwrap());

/// Start and end markers of a collapsible region
pub struct RegionMarkers<'a> {
    pub start: &'a Regex,
    pub end: &'a Regex,
}

impl RegionMarkers<'_> {
    fn is_marker(&self, text: &str) -> bool {
        self.start.is_match(text) || self.end.is_match(text)
    }
}

/// Drop region marker lines.
///
/// Markers are removed on sight rather than matched as blocks, so an end
/// marker without a start is simply removed too.
pub fn remove_regions(syntax: &Syntax, doc: &Document, markers: &RegionMarkers<'_>) -> Document {
    let carries = scan_carries(syntax, &doc.lines);
    let lines = doc
        .lines
        .iter()
        .zip(carries)
        .filter(|(line, (start, _))| start.in_literal() || !markers.is_marker(&line.text))
        .map(|(line, _)| line.clone())
        .collect();
    doc.with_lines(lines)
}

/// Drop whitespace-only lines that are not literal content
pub fn remove_empty_lines(syntax: &Syntax, doc: &Document) -> Document {
    let carries = scan_carries(syntax, &doc.lines);
    let lines = doc
        .lines
        .iter()
        .zip(carries)
        .filter(|(line, (start, _))| start.in_literal() || !line.is_blank())
        .map(|(line, _)| line.clone())
        .collect();
    doc.with_lines(lines)
}

/// Trim trailing whitespace on every line that does not end inside a literal
pub fn trim_trailing(syntax: &Syntax, doc: &Document) -> Document {
    let carries = scan_carries(syntax, &doc.lines);
    let lines = doc
        .lines
        .iter()
        .zip(carries)
        .map(|(line, (_, end))| {
            if end.in_literal() {
                line.clone()
            } else {
                line.with_text(line.text.trim_end())
            }
        })
        .collect();
    doc.with_lines(lines)
}

/// Apply `rewrite` to every line. Only for languages without literal spans.
pub fn map_lines(doc: &Document, rewrite: impl Fn(&str) -> String) -> Document {
    let lines = doc
        .lines
        .iter()
        .map(|line| line.with_text(rewrite(&line.text)))
        .collect();
    doc.with_lines(lines)
}

/// Cut byte ranges of the rendered document out of it.
///
/// `spans` must be sorted and non-overlapping, as produced by a regex
/// `find_iter`. Line handling matches comment stripping: untouched lines
/// stay byte-identical, touched lines are trimmed at the end and dropped
/// when left blank.
pub fn remove_spans(doc: &Document, spans: &[Range<usize>]) -> Document {
    let mut lines = Vec::with_capacity(doc.lines.len());
    let mut offset = 0;

    for line in &doc.lines {
        let range = offset..offset + line.text.len();
        offset = range.end + usize::from(line.cr) + 1;

        let mut cursor = range.start;
        let mut kept = String::new();
        let mut removed = false;
        for span in spans
            .iter()
            .filter(|span| span.start < range.end.max(range.start + 1) && span.end > range.start)
        {
            removed = true;
            let cut = span.start.max(range.start);
            if cut > cursor {
                kept.push_str(&line.text[cursor - range.start..cut - range.start]);
            }
            cursor = cursor.max(span.end.min(range.end));
        }

        if !removed {
            lines.push(line.clone());
            continue;
        }
        kept.push_str(&line.text[cursor - range.start..]);
        if !kept.trim().is_empty() {
            lines.push(line.with_text(kept.trim_end()));
        }
    }

    doc.with_lines(lines)
}

/// Collapse whitespace runs and tighten spacing around punctuation, only in
/// code pieces. Leading indentation is dropped when `strip_indent` is set
/// and left alone otherwise.
pub fn compact_code(syntax: &Syntax, doc: &Document, strip_indent: bool) -> Document {
    let mut carry = Carry::Code;
    let mut lines = Vec::with_capacity(doc.lines.len());

    for line in &doc.lines {
        let start = carry;
        let (pieces, next) = lex_line(syntax, &line.text, carry);
        carry = next;

        let mut out = String::with_capacity(line.text.len());
        for (index, piece) in pieces.iter().enumerate() {
            match piece {
                Piece::Code(code) if index == 0 && start == Carry::Code => {
                    let body = code.trim_start_matches([' ', '\t']);
                    if !strip_indent {
                        out.push_str(&code[..code.len() - body.len()]);
                    }
                    out.push_str(&compact(body));
                }
                Piece::Code(code) => out.push_str(&compact(code)),
                other => out.push_str(other.text()),
            }
        }

        if !next.in_literal() {
            out.truncate(out.trim_end().len());
        }
        lines.push(Line::new(out, line.cr));
    }

    doc.with_lines(lines)
}

fn compact(code: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(code, " ");
    PUNCTUATION_SPACING
        .replace_all(&collapsed, "$1")
        .into_owned()
}
