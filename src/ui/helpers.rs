//! UI helper functions
//!
//! Widths are measured in terminal columns, so Hangul and emoji count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word wrapping by display width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.width() + 1 + word.width() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Cut `text` to at most `max_width` columns, ending in "..." when shortened
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Display width of a string in columns
pub fn display_width(text: &str) -> usize {
    text.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_wide_chars() {
        // Each Hangul syllable is two columns wide
        let result = wrap_text("토큰 없음 통과", 10);
        assert_eq!(result, vec!["토큰 없음", "통과"]);
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate("Client", 10), "Client");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Gateway JWT Filter", 10), "Gateway...");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Budget of 4 columns holds two syllables
        assert_eq!(truncate("회원가입 흐름", 7), "회원...");
        assert!(display_width(&truncate("회원가입 흐름", 8)) <= 8);
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate("Controller", 2), "..");
    }
}
