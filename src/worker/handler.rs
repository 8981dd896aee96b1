//! Worker thread implementation.
//!
//! Runs on a thread spawned by Zellij and performs the file I/O the plugin
//! thread must not block on: reading the unlocked database snapshot.

use crate::database::DatabaseSnapshot;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. Stateless between messages: every request names its file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchWorker {}

impl SearchWorker {
    fn handle_open_database(path: String) -> WorkerResponse {
        match DatabaseSnapshot::load(&path) {
            Ok(snapshot) => {
                tracing::debug!(path = %path, "database snapshot opened");
                WorkerResponse::DatabaseOpened { path, snapshot }
            }
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "failed to open database snapshot");
                WorkerResponse::Error {
                    message: format!("open database {path}: {e}"),
                }
            }
        }
    }

    /// Re-attaches the plugin span's context so worker spans become its children.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one request and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::OpenDatabase { path, .. } => Self::handle_open_database(path),
        }
    }
}

/// Configuration for the worker thread's subscriber, carrying the plugin's
/// `trace_level` from the first request.
fn tracing_config(message: &WorkerMessage) -> crate::Config {
    crate::Config {
        trace_level: message.trace_level().map(str::to_string),
        ..crate::Config::default()
    }
}

/// Set once the worker thread has installed its own subscriber.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for SearchWorker {
    /// Decodes a JSON request, handles it and posts the JSON response back
    /// under the same message name.
    ///
    /// The worker thread has no configuration of its own, so its subscriber is
    /// installed on the first request using the level that request carries.
    fn on_message(&mut self, message: String, payload: String) {
        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&tracing_config(&worker_message));
        }

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn opens_a_snapshot_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":1,"name":"vault","root":{{"title":"Root","entries":[{{"uuid":"a","title":"Mail"}}]}}}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let response = SearchWorker::default().handle_message(WorkerMessage::OpenDatabase {
            path: path.clone(),
            trace_level: None,
            trace_context: None,
        });

        match response {
            WorkerResponse::DatabaseOpened { path: opened, snapshot } => {
                assert_eq!(opened, path);
                assert_eq!(snapshot.name, "vault");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn failures_become_error_responses() {
        let response = SearchWorker::default().handle_message(WorkerMessage::OpenDatabase {
            path: "/nowhere/vault.json".to_string(),
            trace_level: None,
            trace_context: None,
        });

        assert!(matches!(
            response,
            WorkerResponse::Error { ref message } if message.starts_with("open database /nowhere/vault.json")
        ));
    }

    #[test]
    fn worker_subscriber_uses_the_requested_level() {
        let message = WorkerMessage::open_database("/host/vault.json".to_string(), Some("trace".to_string()));
        assert_eq!(tracing_config(&message).trace_level.as_deref(), Some("trace"));

        let plain = WorkerMessage::open_database("/host/vault.json".to_string(), None);
        assert_eq!(tracing_config(&plain).trace_level, None);
    }
}
