//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the database/worker layers.
//! Every invocation, whether it constructs the view or arrives later, flows
//! through the same path:
//!
//! ```text
//! Invocation → parse_query → resolve (Database) → Layout::select → title → adapter
//!                                     ↑
//!              Worker Responses ──────┘ (bind/unbind the database)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`invocation`]: Search invocation shape and query extraction
//! - [`layout`]: Layout selection and exit codes
//! - [`resolver`]: Query resolution through the database facade
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use kpsearch::app::{handle_event, AppState, Event, Layout};
//! use kpsearch::database::SearchParameters;
//! use kpsearch::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), SearchParameters::default());
//! let (render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert_eq!(state.layout, Layout::Empty);
//! # Ok::<(), kpsearch::KpSearchError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod invocation;
pub mod layout;
pub mod resolver;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, PATH_ARG, PIPE_LOCK, PIPE_OPEN};
pub use invocation::{parse_query, SearchInvocation, ACTION_SEARCH, QUERY_EXTRA};
pub use layout::{ExitCode, Layout};
pub use resolver::resolve;
pub use state::{group_title, AppState, DEFAULT_TITLE};
