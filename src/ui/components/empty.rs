//! Empty layout body: a centered message with a dimmed subtitle beneath it.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row of the message line; the subtitle goes on the row after it.
const MESSAGE_ROW: usize = 6;

pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(out, MESSAGE_ROW, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, MESSAGE_ROW + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
}
