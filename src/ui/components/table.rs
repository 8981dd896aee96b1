//! Read-only entry listing with TITLE, USERNAME, MODIFIED and URL columns.
//!
//! Column widths come from [`crate::ui::adapter`], which already truncated the
//! cell contents to fit them.

use crate::ui::adapter::{MODIFIED_COLUMN_WIDTH, TITLE_COLUMN_WIDTH, USERNAME_COLUMN_WIDTH};
use crate::ui::helpers::{self, display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.column_header_fg));
    out.push_str(&format!(
        "{:<tw$}{:<uw$}{:<mw$}{}",
        "TITLE",
        "USERNAME",
        "MODIFIED",
        "URL",
        tw = TITLE_COLUMN_WIDTH,
        uw = USERNAME_COLUMN_WIDTH,
        mw = MODIFIED_COLUMN_WIDTH,
    ));
    out.push_str(Theme::reset());
    row + 1
}

pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_table_row(out, current_row, item, theme, cols))
}

/// Draws one entry, padding to the full width so the selection background
/// covers the whole line.
fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(out, &item.title, &item.highlight_ranges, theme, item.is_selected);
    pad(out, TITLE_COLUMN_WIDTH.saturating_sub(display_width(&item.title)));

    out.push_str(&item.username);
    pad(out, USERNAME_COLUMN_WIDTH.saturating_sub(display_width(&item.username)));

    out.push_str(&item.modified);
    pad(out, MODIFIED_COLUMN_WIDTH.saturating_sub(display_width(&item.modified)));

    out.push_str(&item.url);

    let line_len = TITLE_COLUMN_WIDTH + USERNAME_COLUMN_WIDTH + MODIFIED_COLUMN_WIDTH + display_width(&item.url);
    pad(out, cols.saturating_sub(line_len));

    out.push_str(Theme::reset());
    row + 1
}
