//! Display-width-aware text measurement, padding, and cell wrapping.
//!
//! All width arithmetic in this crate counts terminal columns, not bytes or
//! code points, so multi-byte and East-Asian wide characters keep columns
//! aligned. ANSI escape codes are preserved in output but never count toward
//! width.

use console::{measure_text_width, pad_str, Alignment};

use crate::types::Align;

/// Returns the display width of a string in terminal columns.
///
/// Wraps `console::measure_text_width`, which handles ANSI escape sequences,
/// CJK wide characters, and zero-width characters.
///
/// # Example
///
/// ```rust
/// use trestle::text::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to the target display width.
///
/// Strings already at or beyond the target width are returned unchanged;
/// padding never truncates.
///
/// # Example
///
/// ```rust
/// use trestle::text::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to the target display width.
///
/// # Example
///
/// ```rust
/// use trestle::text::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to the target display width.
///
/// When the remaining space is odd, the extra column goes on the right.
///
/// # Example
///
/// ```rust
/// use trestle::text::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("ab", 5), " ab  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Pads `text` to `width` under the given alignment.
pub(crate) fn pad_to_width(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(text, width),
        Align::Right => pad_left(text, width),
        Align::Center => pad_center(text, width),
    }
}

/// Splits a cell into display lines, word-wrapping when any line exceeds
/// `wrap_width`.
///
/// The cell is first split on embedded newlines. If every resulting line
/// fits within `wrap_width`, those lines are returned as-is. Otherwise each
/// line is greedily wrapped at whitespace boundaries; a single word wider
/// than `wrap_width` is hard-broken rather than overflowing the column.
pub(crate) fn wrap_cell(text: &str, wrap_width: usize) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let widest = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
    if widest <= wrap_width {
        return lines.into_iter().map(|line| line.to_string()).collect();
    }

    // FirstFit packs each line full before moving on; the default optimal-fit
    // algorithm would balance line lengths and shift break positions. Breaks
    // happen at ASCII spaces only: the default separator and splitter would
    // also split a fitting hyphenated word at its hyphen. Words wider than
    // the wrap width are still hard-broken (break_words stays on).
    let options = textwrap::Options::new(wrap_width.max(1))
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation);
    lines
        .into_iter()
        .flat_map(|line| textwrap::wrap(line, &options))
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- display_width tests ---

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("日本語"), 6);
        assert_eq!(display_width("café"), 4);
    }

    // --- padding tests ---

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("", 3), "   ");
    }

    #[test]
    fn pad_right_basic() {
        assert_eq!(pad_right("42", 5), "42   ");
    }

    #[test]
    fn pad_center_even_split() {
        assert_eq!(pad_center("hi", 6), "  hi  ");
    }

    #[test]
    fn pad_center_odd_remainder_goes_right() {
        assert_eq!(pad_center("ab", 5), " ab  ");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_left("hello", 3), "hello");
        assert_eq!(pad_right("hello", 3), "hello");
        assert_eq!(pad_center("hello", 3), "hello");
    }

    #[test]
    fn pad_to_width_dispatch() {
        assert_eq!(pad_to_width("x", 3, Align::Left), "x  ");
        assert_eq!(pad_to_width("x", 3, Align::Right), "  x");
        assert_eq!(pad_to_width("x", 3, Align::Center), " x ");
    }

    #[test]
    fn pad_cjk_counts_columns() {
        // 日本 occupies 4 columns, so only 2 spaces are added
        assert_eq!(pad_right("日本", 6), "日本  ");
    }

    // --- wrap_cell tests ---

    #[test]
    fn wrap_short_text_unchanged() {
        assert_eq!(wrap_cell("hello", 50), vec!["hello"]);
    }

    #[test]
    fn wrap_empty_text_is_one_empty_line() {
        assert_eq!(wrap_cell("", 50), vec![""]);
    }

    #[test]
    fn wrap_preserves_embedded_newlines_when_short() {
        assert_eq!(wrap_cell("a\nb", 50), vec!["a", "b"]);
    }

    #[test]
    fn wrap_splits_long_text_at_whitespace() {
        let lines = wrap_cell("alpha beta gamma", 10);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn wrap_is_greedy_not_balanced() {
        // A balancing wrapper would break after "few" to even out the
        // lines; greedy fills the first line to the limit.
        let lines = wrap_cell("These few words will unfortunately not wrap nicely.", 15);
        assert_eq!(
            lines,
            vec!["These few words", "will", "unfortunately", "not wrap", "nicely."]
        );
    }

    #[test]
    fn wrap_keeps_fitting_hyphenated_word_whole() {
        // "self-aware" is exactly 10 columns and fits; a hyphen break
        // would leave "ab self-" on the first line.
        let lines = wrap_cell("ab self-aware", 10);
        assert_eq!(lines, vec!["ab", "self-aware"]);
    }

    #[test]
    fn wrap_hard_breaks_overlong_word() {
        let lines = wrap_cell("abcdefghij", 4);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(display_width(line) <= 4);
        }
    }

    #[test]
    fn wrap_applies_per_embedded_line() {
        let lines = wrap_cell("short\nalpha beta gamma", 10);
        assert_eq!(lines, vec!["short", "alpha beta", "gamma"]);
    }
}
