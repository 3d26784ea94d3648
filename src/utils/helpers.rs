//! Helper functions and utilities
//!
//! Small pure helpers used across the application.

/// Replace Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669)
/// digits with their ASCII equivalents.
///
/// Keyboard time presets are rendered with Persian digits, while the
/// alarm wizard validates times with a strict `%H:%M` parse that only
/// accepts ASCII digits.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '۰'..='۹' => ascii_digit(c as u32 - '۰' as u32),
            '٠'..='٩' => ascii_digit(c as u32 - '٠' as u32),
            other => other,
        })
        .collect()
}

fn ascii_digit(offset: u32) -> char {
    (b'0' + offset as u8) as char
}

/// Truncate text to a maximum number of characters, for log previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_persian_digits() {
        assert_eq!(normalize_digits("۰۷:۰۰"), "07:00");
        assert_eq!(normalize_digits("۱۸:۳۰"), "18:30");
    }

    #[test]
    fn test_normalize_arabic_indic_digits() {
        assert_eq!(normalize_digits("٠٩:١٥"), "09:15");
    }

    #[test]
    fn test_normalize_leaves_ascii_untouched() {
        assert_eq!(normalize_digits("08:00"), "08:00");
        assert_eq!(normalize_digits("سلام"), "سلام");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("hello world", 5), "hello");
        assert_eq!(preview("کوتاه", 40), "کوتاه");
    }
}
