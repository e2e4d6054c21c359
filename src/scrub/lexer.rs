//! Single-pass, line-at-a-time lexer that separates code from comments and
//! string literals.
//!
//! Each scanner describes its language with a [`Syntax`]. [`lex_line`]
//! splits one line into [`Piece`]s and returns the [`Carry`] state that
//! continues into the next line, so block comments and multi-line literals
//! are tracked without building a syntax tree. Every pass that has to leave
//! literal content alone (comment stripping, doc removal, whitespace
//! optimization) goes through this one function.

use super::escape::{find_closing, is_escaped, Escape};
use super::text::{Document, Line};

/// Plain comments are always stripped; doc comments only on request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentClass {
    Plain,
    Doc,
}

/// A string or template literal delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralDelim {
    pub open: &'static str,
    pub close: &'static str,
    pub escape: Escape,
    /// Whether the literal may continue past the end of a line
    pub multiline: bool,
}

impl LiteralDelim {
    pub const fn single_line(quote: &'static str) -> Self {
        Self {
            open: quote,
            close: quote,
            escape: Escape::Backslash,
            multiline: false,
        }
    }

    pub const fn multi_line(open: &'static str, close: &'static str, escape: Escape) -> Self {
        Self {
            open,
            close,
            escape,
            multiline: true,
        }
    }
}

/// Comment and literal delimiters of one language
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    pub line_comment: Option<&'static str>,
    /// Line comment marker that denotes documentation, e.g. `///`
    pub doc_line_comment: Option<&'static str>,
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Block opener that denotes documentation, e.g. `/**`
    pub doc_block_opener: Option<&'static str>,
    /// Checked in order, so longer openers must come first
    pub literals: &'static [LiteralDelim],
}

impl Syntax {
    /// No comments and no literals: every line is code
    pub const PLAIN: Syntax = Syntax {
        line_comment: None,
        doc_line_comment: None,
        block_comment: None,
        doc_block_opener: None,
        literals: &[],
    };

    fn block_close(&self) -> &'static str {
        self.block_comment.map_or("*/", |(_, close)| close)
    }

    fn token_at(&self, line: &str, index: usize) -> Option<Token> {
        if is_escaped(line, index) {
            return None;
        }
        let rest = &line[index..];

        if let Some(marker) = self.doc_line_comment {
            if is_doc_marker(rest, marker) {
                return Some(Token::LineComment(CommentClass::Doc));
            }
        }
        if let Some(marker) = self.line_comment {
            if rest.starts_with(marker) {
                return Some(Token::LineComment(CommentClass::Plain));
            }
        }
        if let Some((open, _)) = self.block_comment {
            if rest.starts_with(open) {
                let class = match self.doc_block_opener {
                    Some(marker) if is_doc_marker(rest, marker) => CommentClass::Doc,
                    _ => CommentClass::Plain,
                };
                return Some(Token::BlockComment(open.len(), class));
            }
        }
        self.literals
            .iter()
            .find(|delim| rest.starts_with(delim.open))
            .map(|delim| Token::Literal(*delim))
    }
}

/// `///` but not `////`, `/**` but not `/**/` or `/***`
fn is_doc_marker(rest: &str, marker: &str) -> bool {
    rest.starts_with(marker) && !rest[marker.len()..].starts_with(['/', '*'])
}

enum Token {
    LineComment(CommentClass),
    /// Opener length and class
    BlockComment(usize, CommentClass),
    Literal(LiteralDelim),
}

/// Lexer state carried from the end of one line into the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Carry {
    #[default]
    Code,
    Block(CommentClass),
    Literal(LiteralDelim),
}

impl Carry {
    pub fn in_literal(&self) -> bool {
        matches!(self, Carry::Literal(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Code(&'a str),
    Literal(&'a str),
    Comment(&'a str, CommentClass),
}

impl<'a> Piece<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Piece::Code(text) | Piece::Literal(text) | Piece::Comment(text, _) => text,
        }
    }
}

/// Split one line into pieces, starting from `carry`.
///
/// Never fails: an unterminated block comment or multi-line literal simply
/// carries into the next line, up to the end of the file.
pub fn lex_line<'a>(syntax: &Syntax, line: &'a str, carry: Carry) -> (Vec<Piece<'a>>, Carry) {
    let mut pieces = Vec::new();

    let mut pos = match carry {
        Carry::Code => 0,
        Carry::Block(class) => {
            let close = syntax.block_close();
            match line.find(close) {
                Some(index) => {
                    let end = index + close.len();
                    pieces.push(Piece::Comment(&line[..end], class));
                    end
                }
                None => {
                    pieces.push(Piece::Comment(line, class));
                    return (pieces, carry);
                }
            }
        }
        Carry::Literal(delim) => match find_closing(line, 0, delim.close, delim.escape) {
            Some(index) => {
                let end = index + delim.close.len();
                pieces.push(Piece::Literal(&line[..end]));
                end
            }
            None => {
                pieces.push(Piece::Literal(line));
                return (pieces, carry);
            }
        },
    };

    let mut code_start = pos;
    while pos < line.len() {
        let Some(token) = syntax.token_at(line, pos) else {
            pos += line[pos..].chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if code_start < pos {
            pieces.push(Piece::Code(&line[code_start..pos]));
        }

        match token {
            Token::LineComment(class) => {
                pieces.push(Piece::Comment(&line[pos..], class));
                return (pieces, Carry::Code);
            }
            Token::BlockComment(open_len, class) => {
                let close = syntax.block_close();
                match line[pos + open_len..].find(close) {
                    Some(offset) => {
                        let end = pos + open_len + offset + close.len();
                        pieces.push(Piece::Comment(&line[pos..end], class));
                        pos = end;
                    }
                    None => {
                        pieces.push(Piece::Comment(&line[pos..], class));
                        return (pieces, Carry::Block(class));
                    }
                }
            }
            Token::Literal(delim) => {
                let body = pos + delim.open.len();
                match find_closing(line, body, delim.close, delim.escape) {
                    Some(index) => {
                        let end = index + delim.close.len();
                        pieces.push(Piece::Literal(&line[pos..end]));
                        pos = end;
                    }
                    None => {
                        pieces.push(Piece::Literal(&line[pos..]));
                        let next = if delim.multiline {
                            Carry::Literal(delim)
                        } else {
                            Carry::Code
                        };
                        return (pieces, next);
                    }
                }
            }
        }
        code_start = pos;
    }

    if code_start < line.len() {
        pieces.push(Piece::Code(&line[code_start..]));
    }
    (pieces, Carry::Code)
}

/// Lexer state at the start and at the end of every line
pub fn scan_carries(syntax: &Syntax, lines: &[Line]) -> Vec<(Carry, Carry)> {
    let mut carry = Carry::Code;
    lines
        .iter()
        .map(|line| {
            let (_, next) = lex_line(syntax, &line.text, carry);
            let span = (carry, next);
            carry = next;
            span
        })
        .collect()
}

/// Remove every comment of `class`.
///
/// Lines untouched by removal pass through byte-for-byte. A line that
/// loses a comment is trimmed at the end (unless it ends inside a literal)
/// and dropped when nothing but whitespace is left.
pub fn strip_comments(syntax: &Syntax, doc: &Document, class: CommentClass) -> Document {
    let mut carry = Carry::Code;
    let mut lines = Vec::with_capacity(doc.lines.len());

    for line in &doc.lines {
        let (pieces, next) = lex_line(syntax, &line.text, carry);
        carry = next;

        let mut removed = false;
        let mut kept = String::with_capacity(line.text.len());
        for piece in pieces {
            match piece {
                Piece::Comment(_, found) if found == class => removed = true,
                other => kept.push_str(other.text()),
            }
        }

        if !removed {
            lines.push(line.clone());
            continue;
        }
        if next.in_literal() {
            lines.push(line.with_text(kept));
        } else if !kept.trim().is_empty() {
            lines.push(line.with_text(kept.trim_end()));
        }
    }

    doc.with_lines(lines)
}
