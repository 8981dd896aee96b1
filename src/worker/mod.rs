//! Background worker for file I/O.
//!
//! Snapshot loading runs on a Zellij worker thread so the plugin thread never
//! blocks on disk. Requests and responses travel as JSON.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation

pub mod handler;
pub mod messages;

pub use handler::SearchWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
