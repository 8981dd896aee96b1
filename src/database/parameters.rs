//! Search parameters controlling which entry fields are matched.

use crate::domain::Entry;

/// Fields to inspect when matching a query, plus tree-walking options.
///
/// The defaults match what users of the password manager expect: titles,
/// usernames, URLs, notes, custom fields and tags are searched; passwords and
/// UUIDs are not; the backup group is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchParameters {
    pub search_in_titles: bool,
    pub search_in_usernames: bool,
    pub search_in_passwords: bool,
    pub search_in_urls: bool,
    pub search_in_notes: bool,
    /// Custom string fields.
    pub search_in_other: bool,
    pub search_in_uuids: bool,
    pub search_in_tags: bool,
    /// Skip the backup (recycle bin) group and everything below it.
    pub omit_backup: bool,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            search_in_titles: true,
            search_in_usernames: true,
            search_in_passwords: false,
            search_in_urls: true,
            search_in_notes: true,
            search_in_other: true,
            search_in_uuids: false,
            search_in_tags: true,
            omit_backup: true,
        }
    }
}

impl SearchParameters {
    /// Checks whether any enabled field of `entry` contains `needle`.
    ///
    /// `needle` must already be lowercased; field values are lowercased here.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::database::SearchParameters;
    /// use kpsearch::domain::Entry;
    ///
    /// let params = SearchParameters::default();
    /// let entry = Entry::new("id-1", "GitHub").with_password("correct horse");
    ///
    /// assert!(params.matches(&entry, "git"));
    /// assert!(!params.matches(&entry, "horse"));
    /// ```
    #[must_use]
    pub fn matches(&self, entry: &Entry, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);

        (self.search_in_titles && contains(&entry.title))
            || (self.search_in_usernames && contains(&entry.username))
            || (self.search_in_passwords && contains(&entry.password))
            || (self.search_in_urls && contains(&entry.url))
            || (self.search_in_notes && contains(&entry.notes))
            || (self.search_in_other && entry.custom_fields.values().any(|v| contains(v)))
            || (self.search_in_uuids && contains(&entry.uuid))
            || (self.search_in_tags && entry.tags.iter().any(|t| contains(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entry {
        Entry::new("0a1b2c3d-aaaa", "Work Mail")
            .with_username("alice")
            .with_password("s3cret-token")
            .with_url("https://mail.example.com")
            .with_notes("recovery codes in the safe")
            .with_tag("work")
            .with_custom_field("PIN", "4242")
    }

    #[test]
    fn default_fields_are_searched_case_insensitively() {
        let params = SearchParameters::default();
        let entry = sample();

        assert!(params.matches(&entry, "work mail"));
        assert!(params.matches(&entry, "alice"));
        assert!(params.matches(&entry, "example.com"));
        assert!(params.matches(&entry, "recovery"));
        assert!(params.matches(&entry, "4242"));
        assert!(params.matches(&entry, "work"));
    }

    #[test]
    fn passwords_and_uuids_are_off_by_default() {
        let params = SearchParameters::default();
        let entry = sample();

        assert!(!params.matches(&entry, "s3cret"));
        assert!(!params.matches(&entry, "0a1b2c3d"));
    }

    #[test]
    fn enabling_a_field_makes_it_searchable() {
        let params = SearchParameters {
            search_in_passwords: true,
            search_in_uuids: true,
            ..SearchParameters::default()
        };
        let entry = sample();

        assert!(params.matches(&entry, "s3cret"));
        assert!(params.matches(&entry, "0a1b2c3d"));
    }

    #[test]
    fn disabling_everything_matches_nothing() {
        let params = SearchParameters {
            search_in_titles: false,
            search_in_usernames: false,
            search_in_passwords: false,
            search_in_urls: false,
            search_in_notes: false,
            search_in_other: false,
            search_in_uuids: false,
            search_in_tags: false,
            omit_backup: true,
        };
        assert!(!params.matches(&sample(), "a"));
    }
}
