/// Escapes every MarkdownV2 special character so user text renders verbatim.
///
/// # Example
///
/// ```
/// use golosovalka::telegram::markdown::escape_markdown_v2;
///
/// assert_eq!(escape_markdown_v2("Cinema (7 p.m.)"), "Cinema \\(7 p\\.m\\.\\)");
/// ```
pub fn escape_markdown_v2(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '_' => result.push_str("\\_"),
            '*' => result.push_str("\\*"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '(' => result.push_str("\\("),
            ')' => result.push_str("\\)"),
            '~' => result.push_str("\\~"),
            '`' => result.push_str("\\`"),
            '>' => result.push_str("\\>"),
            '#' => result.push_str("\\#"),
            '+' => result.push_str("\\+"),
            '-' => result.push_str("\\-"),
            '=' => result.push_str("\\="),
            '|' => result.push_str("\\|"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '.' => result.push_str("\\."),
            '!' => result.push_str("\\!"),
            _ => result.push(c),
        }
    }

    result
}

/// Wraps already-escaped text in MarkdownV2 bold markers.
pub fn bold(escaped: &str) -> String {
    format!("*{}*", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_is_unchanged() {
        assert_eq!(escape_markdown_v2("Куда пойдем"), "Куда пойдем");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_markdown_v2("a_b*c"), "a\\_b\\*c");
        assert_eq!(escape_markdown_v2("Total: 1!"), "Total: 1\\!");
        assert_eq!(escape_markdown_v2("\\"), "\\\\");
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold(&escape_markdown_v2("Why?")), "*Why?*");
    }
}
