//! Keybinding hints along the bottom row.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Draws the hints centered in the dim color, truncated on narrow panes.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, &footer.keybindings, cols);
    out.push_str(Theme::reset());
    row + 1
}
