use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` to at most `max_cells` cells, ending with `…` when cut.
/// Never splits a grapheme cluster.
pub fn fit_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `at`, if any
pub fn next_boundary(s: &str, at: usize) -> Option<usize> {
    let g = s.get(at..)?.graphemes(true).next()?;
    Some(at + g.len())
}

/// Byte offset of the grapheme before `at`, if any
pub fn prev_boundary(s: &str, at: usize) -> Option<usize> {
    let g = s.get(..at)?.graphemes(true).next_back()?;
    Some(at - g.len())
}

/// Terminal column of byte offset `at`
pub fn col_at(s: &str, at: usize) -> usize {
    display_width(&s[..at.min(s.len())])
}

/// Start of the word before `at` (whitespace-delimited), for Ctrl-W
pub fn prev_word_start(s: &str, at: usize) -> usize {
    let head = &s[..at.min(s.len())];
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(pos) => pos + trimmed[pos..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// Collapse control characters (tabs, newlines from a paste) into spaces
pub fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("牛奶"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_fit_width_untouched_when_short() {
        assert_eq!(fit_width("Buy milk", 20), "Buy milk");
        assert_eq!(fit_width("Buy milk", 8), "Buy milk");
    }

    #[test]
    fn test_fit_width_cuts_with_ellipsis() {
        assert_eq!(fit_width("Walk the dog", 6), "Walk \u{2026}");
        assert_eq!(fit_width("Walk", 1), "\u{2026}");
        assert_eq!(fit_width("Walk", 0), "");
    }

    #[test]
    fn test_fit_width_wide_chars() {
        // 牛奶咖啡 is 8 cells; 5 leaves room for two wide chars and the ellipsis
        assert_eq!(fit_width("牛奶咖啡", 5), "牛奶\u{2026}");
        assert!(display_width(&fit_width("牛奶咖啡", 4)) <= 4);
    }

    #[test]
    fn test_boundaries() {
        let s = "a🎉b";
        assert_eq!(next_boundary(s, 0), Some(1));
        assert_eq!(next_boundary(s, 1), Some(5));
        assert_eq!(next_boundary(s, 6), None);
        assert_eq!(prev_boundary(s, 5), Some(1));
        assert_eq!(prev_boundary(s, 0), None);
    }

    #[test]
    fn test_boundaries_combining() {
        let s = "cafe\u{0301}!";
        assert_eq!(next_boundary(s, 3), Some(6));
        assert_eq!(prev_boundary(s, 6), Some(3));
    }

    #[test]
    fn test_col_at() {
        assert_eq!(col_at("牛奶", 3), 2);
        assert_eq!(col_at("milk", 10), 4);
    }

    #[test]
    fn test_prev_word_start() {
        let s = "walk the dog";
        assert_eq!(prev_word_start(s, s.len()), 9);
        assert_eq!(prev_word_start(s, 9), 5);
        assert_eq!(prev_word_start(s, 4), 0);
        assert_eq!(prev_word_start("", 0), 0);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("buy\tmilk\r\nnow"), "buy milk  now");
    }
}
