//! Database facade abstraction.
//!
//! This module defines the [`Database`] trait: the single seam through which the
//! results view reaches the unlocked password store. The view receives a handle
//! at composition time instead of consulting a process-wide global, so tests can
//! bind a stub and the plugin can swap the handle when a database is opened or
//! locked.

use crate::domain::Group;
use std::fmt::Debug;

/// Handle to the currently unlocked password store.
///
/// # Implementations
///
/// - [`MemoryDatabase`](crate::database::MemoryDatabase): searches an in-memory
///   group tree built from an unlocked snapshot
///
/// # Examples
///
/// ```
/// use kpsearch::database::Database;
/// use kpsearch::domain::Group;
///
/// #[derive(Debug)]
/// struct Nothing;
///
/// impl Database for Nothing {
///     fn search(&self, query: &str) -> Option<Group> {
///         Some(Group::new(format!("Search results: {query}")))
///     }
/// }
///
/// let group = Nothing.search("github").unwrap();
/// assert!(group.is_empty());
/// ```
pub trait Database: Debug {
    /// Searches the store for entries matching `query`.
    ///
    /// Returns a group whose `child_entries` are the matches, in the order the
    /// store ranks them. A group with no children is a legitimate "no matches"
    /// answer. `None` means the search could not be performed at all.
    fn search(&self, query: &str) -> Option<Group>;
}
