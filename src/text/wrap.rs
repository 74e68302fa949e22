//! Character-count line wrapping with a hard line budget.
//!
//! Offsets are counted in `char`s, not bytes, so accented text wraps at the
//! same positions as plain ASCII.

/// Index of the last ASCII space strictly before `limit`.
fn last_space_before(chars: &[char], limit: usize) -> Option<usize> {
    let end = limit.min(chars.len());
    chars[..end].iter().rposition(|&c| c == ' ')
}

/// Wrap `text` into at most `max_lines` lines of roughly `chars_per_line`.
///
/// Every line but the last is broken at the last space before the threshold
/// (or hard-cut there when the line has no space). Whatever does not fit in
/// the last line is dropped, again preferring a word boundary.
pub fn wrap(text: &str, chars_per_line: usize, max_lines: usize) -> Vec<String> {
    let max_lines = max_lines.max(1);
    let mut lines = Vec::with_capacity(max_lines);
    let mut remaining: Vec<char> = text.chars().collect();

    while remaining.len() > chars_per_line && lines.len() < max_lines - 1 {
        let cut = last_space_before(&remaining, chars_per_line).unwrap_or(chars_per_line);
        lines.push(remaining[..cut].iter().collect::<String>());
        let rest: String = remaining[cut..].iter().collect();
        remaining = rest.trim().chars().collect();
    }

    if remaining.len() > chars_per_line {
        let cut = last_space_before(&remaining, chars_per_line).unwrap_or(chars_per_line);
        remaining.truncate(cut);
    }
    lines.push(remaining.into_iter().collect());

    lines
}
