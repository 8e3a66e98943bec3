//! Formatting and display logic
//!
//! Pure functions for turning artwork fields into table cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of any missing attribute
pub const PLACEHOLDER: &str = "N/A";

/// Text attribute or the placeholder
///
/// Blank strings count as missing. Embedded newlines (common in
/// inscriptions and artist lines) are collapsed so each row stays one line.
///
/// # Examples
/// ```
/// use artview::logic::formatting::text_or_placeholder;
///
/// assert_eq!(text_or_placeholder(None), "N/A");
/// assert_eq!(text_or_placeholder(Some("  ")), "N/A");
/// assert_eq!(text_or_placeholder(Some("Claude Monet\nFrench, 1840-1926")), "Claude Monet French, 1840-1926");
/// ```
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => single_line(text),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Year attribute or the placeholder
pub fn year_or_placeholder(value: Option<i32>) -> String {
    match value {
        Some(year) => year.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Collapse all whitespace runs (including newlines) into single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to a display width, ending with '…' when cut
///
/// Width is measured in terminal cells, so wide characters count double.
///
/// # Examples
/// ```
/// use artview::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Nighthawks", 20), "Nighthawks");
/// assert_eq!(truncate_to_width("Nighthawks", 6), "Night…");
/// assert_eq!(truncate_to_width("Nighthawks", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_or_placeholder() {
        assert_eq!(year_or_placeholder(Some(1880)), "1880");
        assert_eq!(year_or_placeholder(Some(-500)), "-500");
        assert_eq!(year_or_placeholder(None), "N/A");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\n b\tc "), "a b c");
    }

    #[test]
    fn test_truncate_exact_fit() {
        assert_eq!(truncate_to_width("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two cells wide
        assert_eq!(truncate_to_width("葛飾北斎", 5), "葛飾…");
    }

    #[test]
    fn test_truncate_width_one() {
        assert_eq!(truncate_to_width("abc", 1), "…");
    }
}
