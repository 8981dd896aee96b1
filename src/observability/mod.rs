//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → kpsearch-otlp.json
//! ```
//!
//! Spans land in `<data dir>/kpsearch-otlp.json` (see
//! [`crate::infrastructure::paths::get_data_dir`]), one OTLP JSON document per
//! line. The file rotates at 10 MiB and keeps three backups.
//!
//! The filter comes from the `trace_level` plugin option and defaults to `info`.
//! Entry passwords are never recorded as span fields.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
