//! Group domain model.
//!
//! A [`Group`] is an ordered container of entries and child groups. The database
//! facade returns search results as a freshly built group whose children are the
//! matching entries; the results view only ever looks at `child_entries`.

use super::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
    /// Entries directly inside this group, in database order.
    pub child_entries: Vec<Entry>,
    pub child_groups: Vec<Group>,
}

impl Group {
    /// Creates an empty group.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::domain::{Entry, Group};
    ///
    /// let group = Group::new("Search results: github")
    ///     .with_entries(vec![Entry::new("id-1", "GitHub")]);
    /// assert_eq!(group.len(), 1);
    /// assert!(!group.is_empty());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            child_entries: Vec::new(),
            child_groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.child_entries = entries;
        self
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Vec<Self>) -> Self {
        self.child_groups = groups;
        self
    }

    /// Number of direct child entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.child_entries.len()
    }

    /// Whether the group has no direct child entries.
    ///
    /// Child groups are not counted: a group holding only subgroups is still
    /// empty as far as the results view is concerned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.child_entries.is_empty()
    }

    /// Counts every entry in this group and all of its descendants.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.child_entries.len() + self.child_groups.iter().map(Self::total_entries).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subgroups_do_not_make_a_group_non_empty() {
        let group = Group::new("Root").with_groups(vec![
            Group::new("Email").with_entries(vec![Entry::new("a", "Mail")]),
        ]);
        assert!(group.is_empty());
        assert_eq!(group.total_entries(), 1);
    }
}
