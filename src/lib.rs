//! kpsearch: a Zellij plugin that shows password database search results.
//!
//! The plugin is the results screen of a password manager. A search request
//! arrives as a pipe message, the query is run against the unlocked database,
//! and the matching entries are shown as a read-only list, or an empty
//! screen when there is nothing to show.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Pipes, keys, worker IPC
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Invocation parsing and query resolution          │
//! │  - Layout selection, title, list binding            │
//! │  - Event handling and actions                       │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Database      │   │ Worker Layer  │
//! │ (ui/)         │   │ (database/)   │   │ (worker/)     │
//! │ - List adapter│   │ - Facade trait│   │ - Snapshot I/O│
//! │ - Rendering   │   │ - In-memory   │   │ - IPC bridge  │
//! │ - Theming     │   │ - Snapshots   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (entries, groups, errors) and sandbox paths │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/kpsearch.wasm" {
//!         database_file "~/vault.json"
//!         theme "catppuccin-mocha"
//!         search_in_notes "false"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! Searches are sent with:
//!
//! ```text
//! zellij pipe --plugin file:/path/to/kpsearch.wasm --name SEARCH --args query=github
//! ```
//!
//! # Library usage
//!
//! ```rust
//! use std::sync::Arc;
//! use kpsearch::app::{handle_event, Event, Layout, SearchInvocation};
//! use kpsearch::database::MemoryDatabase;
//! use kpsearch::domain::{Entry, Group};
//! use kpsearch::{initialize, Config};
//!
//! let config = Config::default();
//! let root = Group::new("Root").with_entries(vec![Entry::new("id-1", "GitHub")]);
//! let mut state = initialize(&config)
//!     .with_database(Arc::new(MemoryDatabase::new("vault", root, config.search_parameters.clone())));
//!
//! handle_event(&mut state, &Event::Create(SearchInvocation::search("git")))?;
//! assert_eq!(state.layout, Layout::ListReadOnly);
//! assert_eq!(state.title, "Search results: git");
//! # Ok::<(), kpsearch::KpSearchError>(())
//! ```

pub mod app;
pub mod database;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Layout, SearchInvocation};
pub use database::{Database, SearchParameters};
pub use domain::{Entry, Group, KpSearchError, Result};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Sandbox path of the unlocked snapshot to open once permissions are granted.
    pub database_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme file; takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Which entry fields a search looks at.
    pub search_parameters: SearchParameters,
}

impl Config {
    /// Parses the plugin configuration map, falling back to defaults for
    /// missing or malformed values.
    ///
    /// # Parameters
    ///
    /// * `config` - Key/value pairs from the plugin block of the Zellij layout
    ///
    /// # Returns
    ///
    /// A configuration with `~` expanded in `database_file` and `theme_file`.
    /// Boolean `search_in_*` and `omit_backup` flags that fail to parse keep
    /// their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use kpsearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("database_file".to_string(), "~/vault.json".to_string());
    /// map.insert("search_in_passwords".to_string(), "true".to_string());
    /// map.insert("omit_backup".to_string(), "maybe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.database_file.as_deref(), Some("/host/vault.json"));
    /// assert!(config.search_parameters.search_in_passwords);
    /// assert!(config.search_parameters.omit_backup);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = SearchParameters::default();
        let flag = |key: &str, default: bool| {
            config.get(key).map_or(default, |value| {
                value.trim().parse::<bool>().unwrap_or_else(|_| {
                    tracing::debug!(key = %key, value = %value, "ignoring malformed boolean option");
                    default
                })
            })
        };

        let search_parameters = SearchParameters {
            search_in_titles: flag("search_in_titles", defaults.search_in_titles),
            search_in_usernames: flag("search_in_usernames", defaults.search_in_usernames),
            search_in_passwords: flag("search_in_passwords", defaults.search_in_passwords),
            search_in_urls: flag("search_in_urls", defaults.search_in_urls),
            search_in_notes: flag("search_in_notes", defaults.search_in_notes),
            search_in_other: flag("search_in_other", defaults.search_in_other),
            search_in_uuids: flag("search_in_uuids", defaults.search_in_uuids),
            search_in_tags: flag("search_in_tags", defaults.search_in_tags),
            omit_backup: flag("omit_backup", defaults.omit_backup),
        };

        let path = |key: &str| {
            config
                .get(key)
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(expand_tilde)
        };

        Self {
            database_file: path("database_file"),
            theme_name: config.get("theme").cloned(),
            theme_file: path("theme_file"),
            trace_level: config.get("trace_level").cloned(),
            search_parameters,
        }
    }
}

/// Builds the initial results view from configuration.
///
/// No database is bound yet: the plugin shim asks the worker to open
/// `database_file` once permissions are granted. An unknown theme name or a
/// broken theme file falls back to the default theme.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing kpsearch plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(theme, config.search_parameters.clone());
    state.trace_level.clone_from(&config.trace_level);
    state
}
