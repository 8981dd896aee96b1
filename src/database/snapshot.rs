//! Unlocked database snapshot loading.
//!
//! A snapshot is a read-only JSON export of a database that has already been
//! unlocked elsewhere. Record types here are kept separate from the domain
//! types so the on-disk shape can evolve without touching the view.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "name": "personal",
//!   "root": {
//!     "title": "Root",
//!     "entries": [
//!       {
//!         "uuid": "8c0f3f6e-7d4b-4c1e-9a51-2f4f1b7c9d10",
//!         "title": "GitHub",
//!         "username": "octocat",
//!         "password": "...",
//!         "url": "https://github.com",
//!         "notes": "",
//!         "tags": ["dev"],
//!         "custom_fields": {},
//!         "last_modified": 1700000000
//!       }
//!     ],
//!     "groups": []
//!   }
//! }
//! ```

use crate::domain::error::{KpSearchError, Result};
use crate::domain::{Entry, Group};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot format version understood by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Stored form of an entry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
    #[serde(default)]
    pub last_modified: Option<i64>,
}

impl std::fmt::Debug for EntryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryRecord")
            .field("uuid", &self.uuid)
            .field("title", &self.title)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Stored form of a group and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
}

/// Top-level snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSnapshot {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub root: GroupRecord,
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Self {
            uuid: record.uuid,
            title: record.title,
            username: record.username,
            password: record.password,
            url: record.url,
            notes: record.notes,
            tags: record.tags,
            custom_fields: record.custom_fields,
            last_modified: record.last_modified,
        }
    }
}

impl From<GroupRecord> for Group {
    fn from(record: GroupRecord) -> Self {
        Self {
            title: record.title,
            child_entries: record.entries.into_iter().map(Entry::from).collect(),
            child_groups: record.groups.into_iter().map(Self::from).collect(),
        }
    }
}

impl DatabaseSnapshot {
    /// Parses a snapshot from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`KpSearchError::Database`] if the text is not valid snapshot JSON
    /// or declares a version other than [`SNAPSHOT_VERSION`].
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(contents)
            .map_err(|e| KpSearchError::Database(format!("failed to parse snapshot: {e}")))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(KpSearchError::Database(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }

        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a database error if
    /// its contents are rejected by [`DatabaseSnapshot::from_json`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kpsearch::database::DatabaseSnapshot;
    ///
    /// let snapshot = DatabaseSnapshot::load("/host/.local/share/kpsearch/personal.json")?;
    /// println!("{} entries", snapshot.into_root().total_entries());
    /// # Ok::<(), kpsearch::KpSearchError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("snapshot_load", path = ?path).entered();

        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&contents)?;

        tracing::debug!(
            name = %snapshot.name,
            root_entries = snapshot.root.entries.len(),
            root_groups = snapshot.root.groups.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Consumes the snapshot, returning its root as a domain group.
    #[must_use]
    pub fn into_root(self) -> Group {
        Group::from(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "version": 1,
        "name": "personal",
        "root": {
            "title": "Root",
            "entries": [{ "uuid": "e1", "title": "GitHub", "username": "octocat" }],
            "groups": [{
                "title": "Email",
                "entries": [{ "uuid": "e2", "title": "Mail", "tags": ["home"] }]
            }]
        }
    }"#;

    #[test]
    fn missing_fields_default_to_empty() {
        let snapshot = DatabaseSnapshot::from_json(SAMPLE).unwrap();
        assert_eq!(snapshot.name, "personal");

        let root = snapshot.into_root();
        assert_eq!(root.child_entries[0].username, "octocat");
        assert!(root.child_entries[0].password.is_empty());
        assert_eq!(root.child_groups[0].child_entries[0].tags, vec!["home"]);
        assert_eq!(root.total_entries(), 2);
    }

    #[test]
    fn debug_output_hides_passwords() {
        let snapshot = DatabaseSnapshot::from_json(
            r#"{"version":1,"root":{"title":"Root","entries":[{"uuid":"a","title":"Bank","password":"hunter2"}]}}"#,
        )
        .unwrap();
        let printed = format!("{snapshot:?}");
        assert!(printed.contains("Bank"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn unknown_versions_are_rejected() {
        let text = SAMPLE.replacen("\"version\": 1", "\"version\": 7", 1);
        let err = DatabaseSnapshot::from_json(&text).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version 7"));
    }

    #[test]
    fn garbage_is_a_database_error() {
        let err = DatabaseSnapshot::from_json("not json").unwrap_err();
        assert!(matches!(err, KpSearchError::Database(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let snapshot = DatabaseSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.root.groups[0].title, "Email");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatabaseSnapshot::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, KpSearchError::Io(_)));
    }
}
