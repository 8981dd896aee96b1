//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They contain no logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use kpsearch::app::Layout;
//! use kpsearch::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     layout: Layout::Empty,
//!     header: HeaderInfo { title: " Search results: zzz ".to_string() },
//!     rows: vec![],
//!     selected_index: 0,
//!     footer: FooterInfo { keybindings: "q: close".to_string() },
//!     empty_state: Some(EmptyState {
//!         message: "No matching entries".to_string(),
//!         subtitle: "Try a different query".to_string(),
//!     }),
//! };
//! assert!(vm.rows.is_empty());
//! ```

use crate::app::Layout;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Which template to draw.
    pub layout: Layout,

    pub header: HeaderInfo,

    /// Visible window of list rows (empty for the empty layout).
    pub rows: Vec<DisplayItem>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    pub footer: FooterInfo,

    /// Message shown by the empty layout.
    pub empty_state: Option<EmptyState>,
}

/// One row of the read-only entry listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Entry title, truncated to the title column.
    pub title: String,

    pub username: String,

    /// Relative modification time ("3d ago").
    pub modified: String,

    /// Entry URL, truncated from the left to fit the remaining width.
    pub url: String,

    pub is_selected: bool,

    /// Character ranges of `title` matching the query, `(start, end)` with an
    /// exclusive end, in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g. "j/k: navigate  q: close").
    pub keybindings: String,
}

/// Empty layout message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g. "No matching entries").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
