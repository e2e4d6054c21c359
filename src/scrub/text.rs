//! Line-oriented view of a source file.

/// One physical line, without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Whether the line was terminated by `\r\n`
    pub cr: bool,
}

impl Line {
    pub fn new(text: impl Into<String>, cr: bool) -> Self {
        Self {
            text: text.into(),
            cr,
        }
    }

    /// Same terminator, different content
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text, self.cr)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Ordered lines of a file. `render(parse(text)) == text` for any input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub lines: Vec<Line>,
    trailing_newline: bool,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let body = if trailing_newline {
            &text[..text.len() - 1]
        } else {
            text
        };

        let lines = if text.is_empty() {
            Vec::new()
        } else {
            body.split('\n')
                .map(|raw| match raw.strip_suffix('\r') {
                    Some(stripped) => Line::new(stripped, true),
                    None => Line::new(raw, false),
                })
                .collect()
        };

        Self {
            lines,
            trailing_newline,
        }
    }

    /// Replace the lines, keeping the file's trailing-newline convention
    pub fn with_lines(&self, lines: Vec<Line>) -> Self {
        Self {
            lines,
            trailing_newline: self.trailing_newline,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&line.text);
            if line.cr {
                out.push('\r');
            }
        }
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}
