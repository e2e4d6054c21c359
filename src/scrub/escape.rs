//! Escape-aware delimiter search shared by every scanner.

/// How a literal lets its closing delimiter appear inside its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `\"` escapes the delimiter; `\\"` does not
    Backslash,
    /// The delimiter is written twice (`""` in C# verbatim strings)
    Doubled,
    /// No escape exists; the first delimiter closes the literal
    None,
}

/// True when the byte at `index` is preceded by an odd number of
/// consecutive backslashes.
pub fn is_escaped(text: &str, index: usize) -> bool {
    let backslashes = text.as_bytes()[..index.min(text.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}

/// Find the first occurrence of `needle` at or after `from` that is not
/// backslash-escaped.
pub fn find_unescaped(text: &str, needle: &str, from: usize) -> Option<usize> {
    find_closing(text, from, needle, Escape::Backslash)
}

/// Find the delimiter that closes a literal, honoring its escape style.
///
/// Delimiters are ASCII, so every index visited is a char boundary.
pub fn find_closing(text: &str, from: usize, close: &str, escape: Escape) -> Option<usize> {
    let mut search = from;
    while search <= text.len() {
        let index = search + text.get(search..)?.find(close)?;
        match escape {
            Escape::Backslash if is_escaped(text, index) => search = index + 1,
            Escape::Doubled if text[index + close.len()..].starts_with(close) => {
                search = index + 2 * close.len();
            }
            _ => return Some(index),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_escaped_counts_backslashes() {
        assert!(!is_escaped("a`", 1));
        assert!(is_escaped(r"a\`", 2));
        assert!(!is_escaped(r"a\\`", 3));
        assert!(is_escaped(r"a\\\`", 4));
        assert!(!is_escaped("`", 0));
    }

    #[test]
    fn test_find_unescaped_skips_escaped_delimiters() {
        let text = r"abc\`def`";
        assert_eq!(find_unescaped(text, "`", 0), Some(8));
    }

    #[test]
    fn test_find_unescaped_accepts_escaped_backslash() {
        let text = r"abc\\`def";
        assert_eq!(find_unescaped(text, "`", 0), Some(5));
    }

    #[test]
    fn test_find_closing_doubled_quotes() {
        let text = r#"say ""hi"" now" + x"#;
        assert_eq!(find_closing(text, 0, "\"", Escape::Doubled), Some(14));
    }

    #[test]
    fn test_find_closing_doubled_ignores_backslash() {
        let text = r#"C:\temp\" rest"#;
        assert_eq!(find_closing(text, 0, "\"", Escape::Doubled), Some(8));
    }

    #[test]
    fn test_find_closing_without_escape() {
        let text = r#"raw \""" tail"#;
        assert_eq!(find_closing(text, 0, "\"\"\"", Escape::None), Some(5));
    }

    #[test]
    fn test_find_closing_missing() {
        assert_eq!(find_closing("no close here", 0, "`", Escape::Backslash), None);
        assert_eq!(find_closing("short", 10, "`", Escape::Backslash), None);
    }
}
