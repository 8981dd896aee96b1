//! In-memory database backend.
//!
//! Holds the group tree of an unlocked database and answers searches by walking
//! it. This is the production binding of the [`Database`] facade; it is built by
//! the plugin once the worker has loaded a snapshot.
//!
//! # Search Algorithm
//!
//! 1. An empty query yields `None`: there is nothing to look for.
//! 2. The tree is walked depth first. Each group contributes its own entries
//!    before its child groups, both in stored order.
//! 3. When `omit_backup` is set, the backup group (a direct child of the root
//!    titled `Backup`, any case) and its whole subtree are skipped.
//! 4. Entries are matched with [`SearchParameters::matches`] against the
//!    lowercased query and collected into a new result group.

use crate::database::backend::Database;
use crate::database::parameters::SearchParameters;
use crate::domain::{Entry, Group};
use std::collections::HashSet;

/// Title of the backup (recycle bin) group.
pub const BACKUP_GROUP_TITLE: &str = "Backup";

/// Prefix of the title given to search result groups.
pub const SEARCH_RESULTS_TITLE: &str = "Search results";

/// Unlocked password database held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDatabase {
    /// Display name of the database.
    name: String,
    root: Group,
    parameters: SearchParameters,
}

impl MemoryDatabase {
    /// Creates a database from its root group.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::database::{Database, MemoryDatabase, SearchParameters};
    /// use kpsearch::domain::{Entry, Group};
    ///
    /// let root = Group::new("Root").with_entries(vec![
    ///     Entry::new("id-1", "GitHub"),
    ///     Entry::new("id-2", "GitLab"),
    /// ]);
    /// let db = MemoryDatabase::new("personal", root, SearchParameters::default());
    ///
    /// let results = db.search("hub").unwrap();
    /// assert_eq!(results.title, "Search results: hub");
    /// assert_eq!(results.len(), 1);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, root: Group, parameters: SearchParameters) -> Self {
        Self {
            name: name.into(),
            root,
            parameters,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn root(&self) -> &Group {
        &self.root
    }

    #[must_use]
    pub const fn parameters(&self) -> &SearchParameters {
        &self.parameters
    }

    /// Whether `group`, found directly under the root, is the backup group.
    fn is_backup(group: &Group) -> bool {
        group.title.eq_ignore_ascii_case(BACKUP_GROUP_TITLE)
    }

    fn collect_matches<'a>(
        &self,
        group: &'a Group,
        needle: &str,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<Entry>,
    ) {
        for entry in &group.child_entries {
            if self.parameters.matches(entry, needle) && seen.insert(entry.uuid.as_str()) {
                out.push(entry.clone());
            }
        }
        for child in &group.child_groups {
            self.collect_matches(child, needle, seen, out);
        }
    }
}

impl Database for MemoryDatabase {
    fn search(&self, query: &str) -> Option<Group> {
        let _span = tracing::debug_span!("memory_search",
            database = %self.name,
            query_len = query.len()
        ).entered();

        if query.is_empty() {
            tracing::debug!("empty query, nothing to search");
            return None;
        }

        let needle = query.to_lowercase();
        let mut seen = HashSet::new();
        let mut matches = Vec::new();

        for entry in &self.root.child_entries {
            if self.parameters.matches(entry, &needle) && seen.insert(entry.uuid.as_str()) {
                matches.push(entry.clone());
            }
        }
        for child in &self.root.child_groups {
            if self.parameters.omit_backup && Self::is_backup(child) {
                tracing::trace!(group = %child.title, "skipping backup group");
                continue;
            }
            self.collect_matches(child, &needle, &mut seen, &mut matches);
        }

        tracing::debug!(match_count = matches.len(), "search complete");

        Some(Group::new(format!("{SEARCH_RESULTS_TITLE}: {query}")).with_entries(matches))
    }
}
