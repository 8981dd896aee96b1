//! Query resolution against the database facade.

use crate::database::Database;
use crate::domain::Group;

/// Obtains the group of entries matching `query`.
///
/// Delegates entirely to [`Database::search`] and does not second-guess the
/// answer. With no database bound (nothing unlocked) the search cannot be
/// performed and `None` is returned without calling anything.
///
/// # Examples
///
/// ```
/// use kpsearch::app::resolve;
///
/// assert!(resolve(None, "github").is_none());
/// ```
#[must_use]
pub fn resolve(database: Option<&dyn Database>, query: &str) -> Option<Group> {
    let Some(database) = database else {
        tracing::debug!("no database bound, search not performed");
        return None;
    };

    let group = database.search(query);

    tracing::debug!(
        resolved = group.is_some(),
        entry_count = group.as_ref().map_or(0, Group::len),
        "query resolved"
    );
    group
}
