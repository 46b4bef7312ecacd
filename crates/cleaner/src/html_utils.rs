// ABOUTME: HTML text helpers for property value rendering.
// ABOUTME: Provides tag stripping for summaries and escaping for plaintext-to-HTML conversion.

/// Strips HTML tags from a string, returning the text between them.
/// This is a naive implementation that removes angle-bracketed content;
/// entities are left as they are.
pub fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Escapes the characters with special meaning in HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_basic() {
        assert_eq!(strip_tags("<p>Hello</p>"), "Hello");
        assert_eq!(
            strip_tags("<b>Bold</b> and <i>italic</i>"),
            "Bold and italic"
        );
    }

    #[test]
    fn test_strip_tags_keeps_entities_and_whitespace() {
        assert_eq!(strip_tags("<p>Tom &amp; Jerry</p>\n"), "Tom &amp; Jerry\n");
    }

    #[test]
    fn test_stray_closing_bracket_is_text() {
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(strip_tags(""), "");
        assert_eq!(escape_html(""), "");
    }
}
