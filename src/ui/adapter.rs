//! List adapter binding a group's entries to the read-only listing.
//!
//! The adapter borrows the bound group's `child_entries` and exposes them in
//! their original order. It owns no data and is rebuilt from `AppState` on
//! every render, so it can never go stale relative to the current group.

use crate::domain::Entry;
use crate::ui::helpers::printable;
use crate::ui::viewmodel::DisplayItem;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::ops::Range;

/// Width of the TITLE column, including the two-space gutter.
pub const TITLE_COLUMN_WIDTH: usize = 32;

/// Width of the USERNAME column, including the two-space gutter.
pub const USERNAME_COLUMN_WIDTH: usize = 24;

/// Width of the MODIFIED column, including the two-space gutter.
pub const MODIFIED_COLUMN_WIDTH: usize = 12;

/// Read-only adapter over an ordered slice of entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryListAdapter<'a> {
    entries: &'a [Entry],
}

impl<'a> EntryListAdapter<'a> {
    /// Binds the adapter to `entries`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::domain::Entry;
    /// use kpsearch::ui::adapter::EntryListAdapter;
    ///
    /// let entries = vec![Entry::new("1", "E1"), Entry::new("2", "E2")];
    /// let adapter = EntryListAdapter::new(&entries);
    ///
    /// let titles: Vec<&str> = adapter.iter().map(|e| e.title.as_str()).collect();
    /// assert_eq!(titles, ["E1", "E2"]);
    /// ```
    #[must_use]
    pub const fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// An adapter with nothing bound.
    #[must_use]
    pub const fn empty() -> Self {
        Self { entries: &[] }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Entry> {
        self.entries.iter()
    }

    /// Builds display rows for the entries in `window`.
    ///
    /// `selected` is an absolute index into the bound entries. Titles are
    /// highlighted with the fuzzy positions of `query` when one is given.
    #[must_use]
    pub fn rows(
        &self,
        window: Range<usize>,
        selected: usize,
        cols: usize,
        query: Option<&str>,
        now: i64,
    ) -> Vec<DisplayItem> {
        let matcher = query.filter(|q| !q.is_empty()).map(|q| (SkimMatcherV2::default(), q));
        let max_url_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + USERNAME_COLUMN_WIDTH + MODIFIED_COLUMN_WIDTH);
        let end = window.end.min(self.entries.len());
        let start = window.start.min(end);

        self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let title = truncate_end(&printable(&entry.title), TITLE_COLUMN_WIDTH - 2);
                let highlight_ranges = matcher
                    .as_ref()
                    .map_or_else(Vec::new, |(m, q)| highlight_ranges(m, &title, q));

                DisplayItem {
                    title,
                    username: truncate_end(&printable(&entry.username), USERNAME_COLUMN_WIDTH - 2),
                    modified: entry.modified_ago(now),
                    url: truncate_start(&printable(&entry.url), max_url_width),
                    is_selected: start + offset == selected,
                    highlight_ranges,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &EntryListAdapter<'a> {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Coalesces fuzzy-match character indices into `(start, end)` runs.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Cuts `text` to `max` characters, marking the cut with "...".
fn truncate_end(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Cuts `text` to `max` characters from the left, keeping the tail.
fn truncate_start(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("1", "GitHub").with_username("octocat").with_url("https://github.com"),
            Entry::new("2", "GitLab").with_username("tanuki"),
            Entry::new("3", "Bitbucket"),
        ]
    }

    #[test]
    fn empty_adapter_has_no_rows() {
        let adapter = EntryListAdapter::empty();
        assert!(adapter.is_empty());
        assert!(adapter.rows(0..10, 0, 120, None, 0).is_empty());
    }

    #[test]
    fn rows_follow_the_window_and_mark_selection() {
        let entries = entries();
        let adapter = EntryListAdapter::new(&entries);

        let rows = adapter.rows(1..3, 2, 120, None, 0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "GitLab");
        assert!(!rows[0].is_selected);
        assert_eq!(rows[1].title, "Bitbucket");
        assert!(rows[1].is_selected);
    }

    #[test]
    fn window_past_the_end_is_clamped() {
        let entries = entries();
        let adapter = EntryListAdapter::new(&entries);
        assert_eq!(adapter.rows(2..50, 0, 120, None, 0).len(), 1);
        assert!(adapter.rows(9..50, 0, 120, None, 0).is_empty());
    }

    #[test]
    fn query_highlights_contiguous_runs() {
        let entries = entries();
        let adapter = EntryListAdapter::new(&entries);

        let rows = adapter.rows(0..1, 0, 120, Some("git"), 0);
        assert_eq!(rows[0].highlight_ranges, vec![(0, 3)]);

        let plain = adapter.rows(0..1, 0, 120, Some(""), 0);
        assert!(plain[0].highlight_ranges.is_empty());
    }

    #[test]
    fn control_characters_never_reach_the_rows() {
        let entries = vec![Entry::new("1", "Git\u{1b}[2J")
            .with_username("bob\r\n")
            .with_url("https://x\u{7}.org")];
        let adapter = EntryListAdapter::new(&entries);

        let rows = adapter.rows(0..1, 0, 120, None, 0);
        assert_eq!(rows[0].title, "Git [2J");
        assert_eq!(rows[0].username, "bob  ");
        assert_eq!(rows[0].url, "https://x .org");
    }

    #[test]
    fn long_values_are_truncated_by_characters() {
        let long = "ü".repeat(40);
        assert_eq!(truncate_end(&long, 10).chars().count(), 10);
        assert!(truncate_end(&long, 10).ends_with("..."));
        assert_eq!(truncate_start("https://example.com/a/very/long/path", 12), "...long/path");
        assert_eq!(truncate_start("short", 12), "short");
    }
}
