//! Search invocations delivered by the host and their parsing.
//!
//! The host addresses the results view with a message carrying an action tag
//! and an extras bundle. In Zellij this is a pipe message:
//!
//! ```text
//! zellij pipe --plugin file:kpsearch.wasm --name SEARCH --args query=github
//! ```
//!
//! The pipe name becomes the action and the `query` argument becomes the query.

use std::collections::BTreeMap;

/// Action tag identifying a search invocation.
pub const ACTION_SEARCH: &str = "SEARCH";

/// Key of the query string in the extras bundle.
pub const QUERY_EXTRA: &str = "query";

/// A host-delivered message addressed to the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInvocation {
    pub action: String,
    pub query: Option<String>,
}

impl SearchInvocation {
    #[must_use]
    pub fn new(action: impl Into<String>, query: Option<String>) -> Self {
        Self {
            action: action.into(),
            query,
        }
    }

    /// Shorthand for a well-formed search invocation.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self::new(ACTION_SEARCH, Some(query.into()))
    }

    /// Builds an invocation from a pipe message's name and arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use kpsearch::app::SearchInvocation;
    ///
    /// let mut args = BTreeMap::new();
    /// args.insert("query".to_string(), "github".to_string());
    ///
    /// let invocation = SearchInvocation::from_pipe("SEARCH", &args);
    /// assert_eq!(invocation, SearchInvocation::search("github"));
    /// ```
    #[must_use]
    pub fn from_pipe(name: &str, args: &BTreeMap<String, String>) -> Self {
        Self::new(name, args.get(QUERY_EXTRA).cloned())
    }
}

/// Extracts the query from an invocation.
///
/// Returns the query iff the action is exactly [`ACTION_SEARCH`] and a query is
/// present. The query is passed through verbatim: no trimming, no case folding,
/// and the empty string is a valid query.
///
/// # Examples
///
/// ```
/// use kpsearch::app::{parse_query, SearchInvocation};
///
/// assert_eq!(parse_query(&SearchInvocation::search(" Mail ")), Some(" Mail "));
/// assert_eq!(parse_query(&SearchInvocation::new("VIEW", Some("x".into()))), None);
/// ```
#[must_use]
pub fn parse_query(invocation: &SearchInvocation) -> Option<&str> {
    if invocation.action == ACTION_SEARCH {
        invocation.query.as_deref()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_actions_are_not_searches() {
        for action in ["VIEW", "search", "SEARCH ", ""] {
            let invocation = SearchInvocation::new(action, Some("anything".to_string()));
            assert_eq!(parse_query(&invocation), None, "action {action:?}");
        }
    }

    #[test]
    fn missing_query_is_not_a_search() {
        assert_eq!(parse_query(&SearchInvocation::new(ACTION_SEARCH, None)), None);
    }

    #[test]
    fn empty_query_passes_through() {
        assert_eq!(parse_query(&SearchInvocation::search("")), Some(""));
    }

    #[test]
    fn pipe_without_query_argument_has_no_query() {
        let mut args = BTreeMap::new();
        args.insert("q".to_string(), "github".to_string());

        let invocation = SearchInvocation::from_pipe("SEARCH", &args);
        assert_eq!(invocation.query, None);
        assert_eq!(parse_query(&invocation), None);
    }
}
