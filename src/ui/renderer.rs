//! Top-level rendering: state to view model to one ANSI frame on stdout.

use crate::app::{AppState, Layout};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the results view for a `rows` x `cols` pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Draws the template selected by `vm.layout` into a string.
///
/// ```rust
/// use kpsearch::app::{AppState, SearchInvocation};
/// use kpsearch::database::SearchParameters;
/// use kpsearch::ui::{render_frame, Theme};
///
/// let mut state = AppState::new(Theme::default(), SearchParameters::default());
/// state.apply_invocation(&SearchInvocation::search("github"));
///
/// let frame = render_frame(&state.compute_viewmodel(24, 80), &state.theme, 24, 80);
/// assert!(frame.contains("No search results"));
/// ```
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    match vm.layout {
        Layout::Empty => components::render_empty_layout(&mut out, vm, theme, cols, rows),
        Layout::ListReadOnly => components::render_list_layout(&mut out, vm, theme, cols, rows),
    }
    out
}
