//! Layout selection and exit codes of the results view.

use crate::domain::Group;

/// The two templates the results view can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Header plus an empty-state message.
    Empty,

    /// Header plus a read-only listing of the group's entries.
    ListReadOnly,
}

impl Layout {
    /// Picks the layout for a (possibly absent) group.
    ///
    /// `ListReadOnly` iff the group exists and has at least one child entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::app::Layout;
    /// use kpsearch::domain::{Entry, Group};
    ///
    /// assert_eq!(Layout::select(None), Layout::Empty);
    /// assert_eq!(Layout::select(Some(&Group::new("none"))), Layout::Empty);
    ///
    /// let one = Group::new("one").with_entries(vec![Entry::new("id", "x")]);
    /// assert_eq!(Layout::select(Some(&one)), Layout::ListReadOnly);
    /// ```
    #[must_use]
    pub fn select(group: Option<&Group>) -> Self {
        match group {
            Some(group) if !group.is_empty() => Self::ListReadOnly,
            _ => Self::Empty,
        }
    }
}

/// Result the view reports to whatever opened it when it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Leaving the view is ordinary navigation, not a reason to tear down the
    /// screens underneath it.
    Normal,
}
