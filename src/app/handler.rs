//! Event handling and state transition logic.
//!
//! Translates plugin-level events into state changes and actions. The plugin
//! shim maps Zellij events onto [`Event`], calls [`handle_event`] and executes
//! the returned actions.
//!
//! # Event Types
//!
//! - **Invocations**: `Create`, `NewInvocation`
//! - **Navigation**: `KeyDown`, `KeyUp`, `Close`
//! - **Database**: `OpenDatabase`, `LockDatabase`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use kpsearch::app::{handle_event, AppState, Event, SearchInvocation};
//! use kpsearch::database::SearchParameters;
//! use kpsearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), SearchParameters::default());
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::Create(SearchInvocation::search("github")))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), kpsearch::KpSearchError>(())
//! ```

use crate::app::invocation::SearchInvocation;
use crate::app::layout::ExitCode;
use crate::app::{Action, AppState};
use crate::database::MemoryDatabase;
use crate::domain::error::Result;
use crate::infrastructure::{expand_tilde, strip_host_prefix};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Pipe name that locks the database.
pub const PIPE_LOCK: &str = "LOCK";

/// Pipe name that opens a snapshot; the path travels in the `path` argument.
pub const PIPE_OPEN: &str = "OPEN";

/// Argument carrying the snapshot path of an [`PIPE_OPEN`] message.
pub const PATH_ARG: &str = "path";

/// Events delivered to the results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view is constructed with an initial invocation.
    Create(SearchInvocation),

    /// Another invocation arrives while the view is displayed.
    NewInvocation(SearchInvocation),

    /// Moves the cursor down (wraps to top).
    KeyDown,

    /// Moves the cursor up (wraps to bottom).
    KeyUp,

    /// Closes the view.
    Close,

    /// Requests that the snapshot at `path` be opened as the current database.
    OpenDatabase {
        /// Sandbox path of the snapshot file.
        path: String,
    },

    /// Locks the current database, dropping the facade.
    LockDatabase,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Routes a pipe message to an event.
    ///
    /// `LOCK` and `OPEN` control the database. Every other message is an
    /// invocation of the results view, which constructs it when `created` is
    /// false and is delivered as a new invocation otherwise. An `OPEN` without
    /// a path is treated as an invocation too, so it ends up on the empty layout.
    /// A `~` in an `OPEN` path resolves inside the sandbox, as `database_file` does.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use kpsearch::app::{Event, SearchInvocation};
    ///
    /// let mut args = BTreeMap::new();
    /// args.insert("query".to_string(), "github".to_string());
    ///
    /// assert_eq!(
    ///     Event::from_pipe("SEARCH", &args, false),
    ///     Event::Create(SearchInvocation::search("github"))
    /// );
    /// assert_eq!(Event::from_pipe("LOCK", &BTreeMap::new(), true), Event::LockDatabase);
    /// ```
    #[must_use]
    pub fn from_pipe(name: &str, args: &BTreeMap<String, String>, created: bool) -> Self {
        match (name, args.get(PATH_ARG)) {
            (PIPE_LOCK, _) => Self::LockDatabase,
            (PIPE_OPEN, Some(path)) => Self::OpenDatabase {
                path: expand_tilde(path.trim()),
            },
            _ => {
                let invocation = SearchInvocation::from_pipe(name, args);
                if created {
                    Self::NewInvocation(invocation)
                } else {
                    Self::Create(invocation)
                }
            }
        }
    }
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// Both kinds of invocation go through [`AppState::apply_invocation`]; only
/// `Create` additionally records the exit code.
///
/// # Parameters
///
/// * `state` - Results view state to update
/// * `event` - Event translated from Zellij by the plugin shim
///
/// # Returns
///
/// `true` when the view must be redrawn, plus the side effects to execute in
/// order (closing the view, posting to the worker).
///
/// # Errors
///
/// Reserved for failures the plugin shim should log; the results view itself
/// never fails an invocation, it falls back to its empty layout instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Create(invocation) => {
            state.exit_code = Some(ExitCode::Normal);
            state.apply_invocation(invocation);
            Ok((true, vec![]))
        }
        Event::NewInvocation(invocation) => {
            state.apply_invocation(invocation);
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Close => {
            let exit_code = state.exit_code.unwrap_or(ExitCode::Normal);
            Ok((false, vec![Action::Finish(exit_code)]))
        }
        Event::OpenDatabase { path } => {
            tracing::debug!(path = %path, "requesting database snapshot");
            let message = WorkerMessage::open_database(path.clone(), state.trace_level.clone());
            Ok((false, vec![Action::PostToWorker(message)]))
        }
        Event::LockDatabase => {
            state.unbind_database();
            Ok((false, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::DatabaseOpened { path, snapshot } => {
                let name = if snapshot.name.is_empty() {
                    strip_host_prefix(path)
                } else {
                    snapshot.name.clone()
                };
                let database = MemoryDatabase::new(
                    name,
                    snapshot.clone().into_root(),
                    state.search_parameters.clone(),
                );
                tracing::debug!(
                    database = %database.name(),
                    entry_count = database.root().total_entries(),
                    "database opened"
                );
                state.bind_database(Arc::new(database));

                if let Some(pending) = state.last_invocation.clone() {
                    tracing::debug!("re-applying last invocation against the opened database");
                    state.apply_invocation(&pending);
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}
