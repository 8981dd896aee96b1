//! Components that draw the two layouts of the results view.
//!
//! - [`render_list_layout`]: header, border, column labels, entries, border, footer
//! - [`render_empty_layout`]: header, border, empty-state message, border, footer
//!
//! Both leave row 1 blank and pin the footer to the last row, with a border
//! directly above it.

mod empty;
mod footer;
mod header;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// First row drawn; row 1 stays blank.
const TOP_ROW: usize = 2;

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(TOP_ROW + 1);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

pub fn render_list_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut row = render_header(out, TOP_ROW, &vm.header, theme, cols);
    row = render_border(out, row, &theme.colors.border, cols);
    row = render_table_headers(out, row, theme);
    render_table_rows(out, row, &vm.rows, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}

pub fn render_empty_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let row = render_header(out, TOP_ROW, &vm.header, theme, cols);
    render_border(out, row, &theme.colors.border, cols);
    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    }

    render_bottom(out, vm, theme, cols, rows);
}
