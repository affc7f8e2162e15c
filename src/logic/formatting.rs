//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a like count compactly
///
/// # Examples
/// ```
/// use imgsearch::logic::formatting::format_likes;
///
/// assert_eq!(format_likes(0), "0");
/// assert_eq!(format_likes(999), "999");
/// assert_eq!(format_likes(1_000), "1.0k");
/// assert_eq!(format_likes(12_345), "12.3k");
/// assert_eq!(format_likes(2_500_000), "2.5M");
/// ```
pub fn format_likes(likes: u64) -> String {
    if likes >= 1_000_000 {
        format!("{:.1}M", likes as f64 / 1_000_000.0)
    } else if likes >= 1_000 {
        format!("{:.1}k", likes as f64 / 1_000.0)
    } else {
        likes.to_string()
    }
}

/// Truncate text to a display width, ending with "…" when cut
///
/// Width is measured in terminal columns, so wide characters count double.
///
/// # Examples
/// ```
/// use imgsearch::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("short", 10), "short");
/// assert_eq!(truncate_to_width("a long description", 7), "a long…");
/// assert_eq!(truncate_to_width("anything", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
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

/// "page 2 / 10" style progress label
pub fn format_page_progress(page: u32, total_pages: Option<u32>) -> String {
    match total_pages {
        Some(total) => format!("page {} / {}", page, total),
        None => format!("page {}", page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_truncate_exact_width_untouched() {
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn test_page_progress() {
        assert_eq!(format_page_progress(2, Some(10)), "page 2 / 10");
        assert_eq!(format_page_progress(1, None), "page 1");
    }
}
