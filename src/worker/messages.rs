//! Worker thread message types.
//!
//! Request and response protocol between the plugin thread and the worker that
//! performs file I/O. Requests carry the poster's trace context so worker spans
//! join the plugin's trace.

use crate::database::DatabaseSnapshot;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Span ID of the posting span as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when there is no valid OpenTelemetry context, e.g. when
    /// tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    open_database(OpenDatabase { path: String, trace_level: Option<String> }),
}

/// Messages sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the unlocked snapshot at `path`.
    OpenDatabase {
        /// Sandbox path of the snapshot file.
        path: String,

        /// The plugin's `trace_level`, applied by the worker's own subscriber.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_level: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Returns the trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::OpenDatabase { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Returns the tracing filter directive the plugin was configured with.
    #[must_use]
    pub fn trace_level(&self) -> Option<&str> {
        match self {
            Self::OpenDatabase { trace_level, .. } => trace_level.as_deref(),
        }
    }
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The snapshot was read and parsed.
    DatabaseOpened {
        /// Path the snapshot was read from.
        path: String,
        snapshot: DatabaseSnapshot,
    },

    /// The worker operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_without_trace_context_omit_the_field() {
        let message = WorkerMessage::OpenDatabase {
            path: "/host/vault.json".to_string(),
            trace_level: None,
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));
        assert!(!json.contains("trace_level"));

        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, message);
        assert!(decoded.trace_context().is_none());
    }

    #[test]
    fn builder_without_tracing_has_no_context() {
        let message = WorkerMessage::open_database("/host/vault.json".to_string(), None);
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn trace_level_travels_with_the_request() {
        let message = WorkerMessage::open_database("/host/vault.json".to_string(), Some("debug".to_string()));
        let json = serde_json::to_string(&message).unwrap();

        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.trace_level(), Some("debug"));

        let legacy: WorkerMessage =
            serde_json::from_str(r#"{"OpenDatabase":{"path":"/host/vault.json"}}"#).unwrap();
        assert_eq!(legacy.trace_level(), None);
    }
}
