//! Width-aware text helpers shared by the widgets
//!
//! Widths are terminal columns, not chars, so CJK names and emoji in recipe
//! data line up with the borders around them.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `max_width` columns, ending with `…` when cut
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns
///
/// Words wider than a whole line are hard-split. Always returns at least one
/// line, so an empty input still occupies a row.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("Soup", 10), "Soup");
        assert_eq!(truncate_with_ellipsis("Soup", 4), "Soup");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("Margherita Pizza", 8), "Margher…");
        assert_eq!(truncate_with_ellipsis("Pizza", 1), "…");
        assert_eq!(truncate_with_ellipsis("Pizza", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        let out = truncate_with_ellipsis("寿司寿司寿司", 5);
        assert_eq!(out, "寿司…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_wrap_words_basic() {
        let lines = wrap_words("Preheat the oven to 220C and bake", 12);
        assert_eq!(lines, vec!["Preheat the", "oven to 220C", "and bake"]);
    }

    #[test]
    fn test_wrap_words_splits_long_word() {
        let lines = wrap_words("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_line() {
        assert_eq!(wrap_words("", 10), vec![String::new()]);
    }
}
