//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the library itself never touches Zellij.
//!
//! # Example
//!
//! ```rust
//! use kpsearch::app::Action;
//! use kpsearch::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::open_database(
//!     "/host/vault.json".to_string(),
//!     None,
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::app::layout::ExitCode;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the view, reporting the given exit code to whatever opened it.
    Finish(ExitCode),

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
