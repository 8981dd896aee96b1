//! Password entry domain model.
//!
//! An [`Entry`] is an individual password record. The results view treats it as
//! opaque apart from the columns it renders; the in-memory database inspects the
//! remaining fields when matching a query.

use std::collections::BTreeMap;
use std::fmt;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single password record.
///
/// `Debug` is implemented by hand so that the password never ends up in a trace.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    /// Stable identifier of the entry, as a hyphenated UUID string.
    pub uuid: String,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
    pub tags: Vec<String>,
    /// User-defined string fields beyond the standard ones.
    pub custom_fields: BTreeMap<String, String>,
    /// Unix timestamp of the last modification, if known.
    pub last_modified: Option<i64>,
}

impl Entry {
    /// Creates an entry with a title and uuid, every other field empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kpsearch::domain::Entry;
    ///
    /// let entry = Entry::new("5f0c6b4e-0000-0000-0000-000000000001", "GitHub")
    ///     .with_username("octocat");
    /// assert_eq!(entry.title, "GitHub");
    /// assert_eq!(entry.username, "octocat");
    /// assert!(entry.password.is_empty());
    /// ```
    #[must_use]
    pub fn new(uuid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            title: title.into(),
            username: String::new(),
            password: String::new(),
            url: String::new(),
            notes: String::new(),
            tags: Vec::new(),
            custom_fields: BTreeMap::new(),
            last_modified: None,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(key.into(), value.into());
        self
    }

    /// Returns a human-readable description of how long ago the entry changed.
    ///
    /// - unknown or out-of-range timestamp: `"-"`
    /// - less than 1 minute: `"just now"`
    /// - less than 1 hour: `"Xm ago"`
    /// - less than 1 day: `"Xh ago"`
    /// - otherwise: `"Xd ago"`
    #[must_use]
    pub fn modified_ago(&self, now: i64) -> String {
        let Some(diff) = self.last_modified.and_then(|modified| now.checked_sub(modified)) else {
            return "-".to_string();
        };

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("uuid", &self.uuid)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("url", &self.url)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
