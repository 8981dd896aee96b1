//! Results view state and view model computation.
//!
//! [`AppState`] is the single source of truth for the results view: the group
//! currently displayed, the layout chosen for it, the title, the list cursor and
//! the injected database facade.
//!
//! # Applying an invocation
//!
//! Construction and every later invocation go through
//! [`AppState::apply_invocation`], which always performs the same steps:
//!
//! 1. Parse the invocation (non-search invocations yield no query)
//! 2. Resolve the query through the bound database, if any
//! 3. Select the layout and set the title from the resulting group
//! 4. Rebind the list adapter by resetting the cursor onto the new entries
//!
//! # Example
//!
//! ```rust
//! use kpsearch::app::{AppState, Layout, SearchInvocation};
//! use kpsearch::database::SearchParameters;
//! use kpsearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), SearchParameters::default());
//! state.apply_invocation(&SearchInvocation::search("github"));
//!
//! // No database is unlocked yet, so nothing could be searched.
//! assert_eq!(state.layout, Layout::Empty);
//! assert!(state.current_group.is_none());
//! ```

use super::invocation::{parse_query, SearchInvocation};
use super::layout::{ExitCode, Layout};
use super::resolver::resolve;
use crate::database::{Database, SearchParameters};
use crate::domain::Group;
use crate::ui::adapter::EntryListAdapter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, UIViewModel};
use std::sync::Arc;

/// Title shown before any group has been obtained.
pub const DEFAULT_TITLE: &str = "Password search";

/// Rows taken by chrome in the read-only layout: blank line, header, border,
/// column headers, border and footer.
const LIST_CHROME_ROWS: usize = 6;

/// Central results view state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Group returned by the last resolution, `None` if nothing was obtained.
    pub current_group: Option<Group>,

    /// Layout selected for `current_group`.
    pub layout: Layout,

    /// Title text, taken from `current_group` when present.
    pub title: String,

    /// Code reported to the opener when the view closes. Set on construction.
    pub exit_code: Option<ExitCode>,

    /// Zero-based cursor within the bound entries.
    pub selected_index: usize,

    /// Query of the last accepted search invocation, used for highlighting.
    pub query: Option<String>,

    /// Last invocation received, kept so it can be re-applied when a database
    /// opens after the invocation arrived.
    pub last_invocation: Option<SearchInvocation>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Field selection used when building a database from a snapshot.
    pub search_parameters: SearchParameters,

    /// Tracing filter forwarded to the worker with every request.
    pub trace_level: Option<String>,

    database: Option<Arc<dyn Database>>,
}

impl AppState {
    /// Creates a view with no database bound and nothing displayed.
    #[must_use]
    pub fn new(theme: Theme, search_parameters: SearchParameters) -> Self {
        Self {
            current_group: None,
            layout: Layout::Empty,
            title: DEFAULT_TITLE.to_string(),
            exit_code: None,
            selected_index: 0,
            query: None,
            last_invocation: None,
            theme,
            search_parameters,
            trace_level: None,
            database: None,
        }
    }

    /// Binds a database facade at construction time.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn Database>) -> Self {
        self.database = Some(database);
        self
    }

    /// Replaces the bound database. Groups already displayed are kept.
    pub fn bind_database(&mut self, database: Arc<dyn Database>) {
        tracing::debug!(replaced = self.database.is_some(), "database bound");
        self.database = Some(database);
    }

    /// Drops the bound database, e.g. when it is locked.
    pub fn unbind_database(&mut self) {
        tracing::debug!("database unbound");
        self.database = None;
    }

    #[must_use]
    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }

    /// Applies a search invocation, refreshing every part of the view state.
    ///
    /// Identical invocations applied twice leave the view exactly as one would,
    /// and a later invocation fully replaces the effects of an earlier one.
    pub fn apply_invocation(&mut self, invocation: &SearchInvocation) {
        let _span = tracing::debug_span!("apply_invocation", action = %invocation.action).entered();

        self.last_invocation = Some(invocation.clone());
        self.query = parse_query(invocation).map(str::to_string);

        self.current_group = match self.query.as_deref() {
            Some(query) => resolve(self.database.as_deref(), query),
            None => {
                tracing::debug!("not a search invocation, skipping resolution");
                None
            }
        };

        self.layout = Layout::select(self.current_group.as_ref());
        self.title = self
            .current_group
            .as_ref()
            .map_or_else(|| DEFAULT_TITLE.to_string(), group_title);
        self.selected_index = 0;

        tracing::debug!(
            layout = ?self.layout,
            title = %self.title,
            entry_count = self.adapter().len(),
            "view refreshed"
        );
    }

    /// Returns the list adapter bound to the current group's entries.
    ///
    /// Empty when no group is displayed.
    #[must_use]
    pub fn adapter(&self) -> EntryListAdapter<'_> {
        self.current_group
            .as_ref()
            .map_or_else(EntryListAdapter::empty, |group| EntryListAdapter::new(&group.child_entries))
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let len = self.adapter().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        let len = self.adapter().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The read-only layout shows a window of rows centered on the cursor,
    /// shifted to stay full near the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let adapter = self.adapter();

        if self.layout == Layout::Empty {
            return UIViewModel {
                layout: Layout::Empty,
                header: HeaderInfo {
                    title: format!(" {} ", self.title),
                },
                rows: vec![],
                selected_index: 0,
                footer: self.compute_footer(),
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(adapter.len());
        if visible_end - visible_start < available_rows && adapter.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let now = chrono::Utc::now().timestamp();
        let display_rows = adapter.rows(
            visible_start..visible_end,
            self.selected_index,
            cols,
            self.query.as_deref(),
            now,
        );

        UIViewModel {
            layout: Layout::ListReadOnly,
            header: HeaderInfo {
                title: format!(" {} ({}) ", self.title, adapter.len()),
            },
            rows: display_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            footer: self.compute_footer(),
            empty_state: None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match &self.current_group {
            Some(_) => EmptyState {
                message: "No matching entries".to_string(),
                subtitle: "Try a shorter or different query".to_string(),
            },
            None if !self.has_database() => EmptyState {
                message: "No search results".to_string(),
                subtitle: "No database is unlocked".to_string(),
            },
            None => EmptyState {
                message: "No search results".to_string(),
                subtitle: "zellij pipe --name SEARCH --args query=<text>".to_string(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.layout {
            Layout::ListReadOnly => "j/k or Ctrl+n/p: navigate  q: close",
            Layout::Empty => "q: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Title convention for groups: the group's own title.
#[must_use]
pub fn group_title(group: &Group) -> String {
    group.title.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;
    use crate::domain::Entry;

    fn state_with_entries(count: usize) -> AppState {
        let entries = (0..count)
            .map(|i| Entry::new(format!("id-{i}"), format!("github {i}")))
            .collect();
        let db = MemoryDatabase::new(
            "test",
            Group::new("Root").with_entries(entries),
            SearchParameters::default(),
        );
        let mut state = AppState::new(Theme::default(), SearchParameters::default())
            .with_database(Arc::new(db));
        state.apply_invocation(&SearchInvocation::search("github"));
        state
    }

    #[test]
    fn out_of_range_timestamps_render_as_unknown() {
        let snapshot = crate::database::DatabaseSnapshot::from_json(
            r#"{"version":1,"name":"vault","root":{"title":"Root","entries":[
                {"uuid":"a","title":"GitHub","last_modified":-9223372036854775808}
            ]}}"#,
        )
        .unwrap();
        let db = MemoryDatabase::new("vault", snapshot.into_root(), SearchParameters::default());
        let mut state = AppState::new(Theme::default(), SearchParameters::default())
            .with_database(Arc::new(db));
        state.apply_invocation(&SearchInvocation::search("git"));

        let vm = state.compute_viewmodel(24, 120);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].modified, "-");
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with_entries(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_a_no_op_without_entries() {
        let mut state = AppState::new(Theme::default(), SearchParameters::default());
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn new_invocation_resets_the_cursor() {
        let mut state = state_with_entries(5);
        state.move_selection_down();
        state.move_selection_down();
        state.apply_invocation(&SearchInvocation::search("github 4"));
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.adapter().len(), 1);
    }

    #[test]
    fn viewmodel_windows_around_the_cursor() {
        let mut state = state_with_entries(30);
        for _ in 0..29 {
            state.move_selection_down();
        }

        // 16 rows of pane leave 10 for the list.
        let vm = state.compute_viewmodel(16, 120);
        assert_eq!(vm.layout, Layout::ListReadOnly);
        assert_eq!(vm.rows.len(), 10);
        assert_eq!(vm.rows[9].title, "github 29");
        assert_eq!(vm.selected_index, 9);
        assert!(vm.rows[9].is_selected);
        assert_eq!(vm.header.title, " Search results: github (30) ");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn empty_viewmodel_explains_why() {
        let state = AppState::new(Theme::default(), SearchParameters::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.layout, Layout::Empty);
        assert_eq!(vm.header.title, format!(" {DEFAULT_TITLE} "));
        assert_eq!(vm.empty_state.unwrap().subtitle, "No database is unlocked");

        let mut state = state_with_entries(1);
        state.apply_invocation(&SearchInvocation::search("zzz"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No matching entries");
        assert_eq!(vm.header.title, " Search results: zzz ");
    }
}
