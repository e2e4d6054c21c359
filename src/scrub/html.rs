//! HTML / Angular template scanner.
//!
//! Markup comments cannot nest and have no escape syntax, so one regex sweep
//! over the whole file finds them. An unclosed `<!--` comments out the rest
//! of the file. Comments whose body opens with a template-engine marker are
//! left in place.

use super::lexer::Syntax;
use super::text::Document;
use super::transforms;
use crate::core::ScrubConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--(.*?)(?:-->|\z)").unwrap());
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">[ \t]+<").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// First body characters that mark a comment as template syntax
const TEMPLATE_MARKERS: [char; 4] = ['(', '=', '*', '+'];

pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    let spans: Vec<_> = COMMENT
        .captures_iter(text)
        .filter(|caps| !caps[1].starts_with(TEMPLATE_MARKERS))
        .filter_map(|caps| caps.get(0))
        .map(|whole| whole.range())
        .collect();
    let mut doc = transforms::remove_spans(&Document::parse(text), &spans);

    if config.strip_empty_lines {
        doc = transforms::remove_empty_lines(&Syntax::PLAIN, &doc);
    }

    if config.optimize_whitespace {
        doc = transforms::map_lines(&doc, |line| {
            let tight = BETWEEN_TAGS.replace_all(line, "><");
            WHITESPACE.replace_all(&tight, " ").trim_end().to_string()
        });
    }

    doc.render()
}
