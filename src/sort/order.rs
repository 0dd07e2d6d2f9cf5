//! Line ordering.

use std::cmp::Ordering;

use super::extract::{Character, Line};

/// Whitespace ignored at both ends of a line when comparing.
///
/// Unicode white space plus U+FEFF, except U+0085 (NEL), which is kept as
/// line content.
fn is_trim_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// The line's text with leading and trailing whitespace removed.
pub fn trimmed_text(line: &[Character]) -> String {
    let text: String = line.iter().map(|c| c.character).collect();
    text.trim_matches(is_trim_whitespace).to_string()
}

/// Compare two trimmed line texts.
///
/// Blank text sorts after everything else; two blanks are equal. Everything
/// else compares by code point.
pub fn compare_trimmed(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

/// Compare two lines by their trimmed text.
pub fn compare_lines(a: &[Character], b: &[Character]) -> Ordering {
    compare_trimmed(&trimmed_text(a), &trimmed_text(b))
}

/// Stable sort of `lines` by [`compare_lines`].
pub fn order_lines(lines: Vec<Line>) -> Vec<Line> {
    let mut keyed: Vec<(String, Line)> = lines
        .into_iter()
        .map(|line| (trimmed_text(&line), line))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_trimmed(a, b));
    keyed.into_iter().map(|(_, line)| line).collect()
}
