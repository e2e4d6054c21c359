//! CSS / SCSS scanner.
//!
//! An unclosed `/*` comments out the rest of the file.

use super::lexer::Syntax;
use super::text::Document;
use super::transforms;
use crate::core::ScrubConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?(?:\*/|\z)").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static DELIMITER_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*([{}:;,])[ \t]*").unwrap());

pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    let spans: Vec<_> = COMMENT.find_iter(text).map(|found| found.range()).collect();
    let mut doc = transforms::remove_spans(&Document::parse(text), &spans);

    if config.strip_empty_lines {
        doc = transforms::remove_empty_lines(&Syntax::PLAIN, &doc);
    }

    if config.optimize_whitespace {
        doc = transforms::map_lines(&doc, |line| {
            let collapsed = WHITESPACE.replace_all(line, " ");
            DELIMITER_SPACING
                .replace_all(&collapsed, "$1")
                .trim()
                .to_string()
        });
    }

    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_comments_removed() {
        let input = indoc! {"
            /* theme */
            .a { color: red; } /* trailing */
            /*
             * docs
             */
            .b { margin: 0; }
        "};
        let expected = indoc! {"
            .a { color: red; }
            .b { margin: 0; }
        "};
        assert_eq!(scrub(input, &ScrubConfig::minimal()), expected);
    }

    #[test]
    fn test_whitespace_around_delimiters() {
        let input = indoc! {"
            .a ,  .b {
                color :  red ;
                font-family: Arial,  sans-serif;
            }
        "};
        let config = ScrubConfig {
            optimize_whitespace: true,
            ..ScrubConfig::minimal()
        };
        let expected = indoc! {"
            .a,.b{
            color:red;
            font-family:Arial,sans-serif;
            }
        "};
        assert_eq!(scrub(input, &config), expected);
    }

    #[test]
    fn test_unterminated_comment_runs_to_end_of_file() {
        let input = ".a { }\n/* never closed\n.b { }\n";
        assert_eq!(scrub(input, &ScrubConfig::minimal()), ".a { }\n");
    }

    #[test]
    fn test_unterminated_comment_after_code_on_same_line() {
        let input = ".a { color: red; } /* open\n.b { }";
        assert_eq!(scrub(input, &ScrubConfig::minimal()), ".a { color: red; }");
    }
}
