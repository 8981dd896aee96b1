//! Low-level frame building shared by the components.
//!
//! Components append ANSI-styled text to a frame buffer instead of printing
//! directly, so a whole frame is written to stdout at once and can be
//! inspected in tests.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Replaces control characters with spaces, so text taken from the database
/// or a pipe cannot inject terminal escape sequences into the frame.
#[must_use]
pub fn printable(text: &str) -> String {
    text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

/// Appends `n` spaces.
pub fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

/// Appends `text` centered in a `cols`-wide line, truncated if it does not fit.
pub fn centered(out: &mut String, text: &str, cols: usize) {
    let text: String = printable(text).chars().take(cols).collect();
    let len = display_width(&text);
    let left = cols.saturating_sub(len) / 2;

    pad(out, left);
    out.push_str(&text);
    pad(out, cols.saturating_sub(left + len));
}

/// Appends `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices with an exclusive end. Selected
/// rows are drawn without highlights so the selection colors stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        pos = end;
    }

    out.extend(&chars[pos..]);
}
