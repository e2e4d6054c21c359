//! Filename glob to regex translation.
//!
//! Supported syntax: `*` (any run of characters), `?` (one character) and
//! `[...]` character classes with `!` or `^` negation. Everything else
//! matches literally. There is no `**` and no path separator handling;
//! patterns are matched against a bare file name.

use crate::core::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Translate `pattern` into an anchored regex source string
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i + 1..end]));
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Index of the `]` closing the class opened at `open`. A `]` right after
/// the opener (or after its negation mark) is a member, not the closer.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut i = open + 1;
    if matches!(chars.get(i), Some('!' | '^')) {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    (i..chars.len()).find(|&j| chars[j] == ']')
}

fn translate_class(body: &[char]) -> String {
    let mut out = String::from("[");
    let mut members = body;
    if let Some(('!' | '^', rest)) = body.split_first() {
        out.push('^');
        members = rest;
    }
    for &c in members {
        match c {
            '\\' | '[' | ']' | '^' | '&' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push(']');
    out
}

/// Compile a glob. Case sensitivity follows the host filesystem convention.
pub fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&translate(pattern))
        .case_insensitive(cfg!(windows))
        .build()
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}
