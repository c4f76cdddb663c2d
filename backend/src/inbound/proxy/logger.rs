//! Invocation logger port used by the proxy handler.
//!
//! The logger is built once at process start and shared read-only by every
//! invocation. Records are best effort: the handler ignores failures.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::macros::define_port_error;

/// Severity of an invocation log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

define_port_error! {
    /// Errors a logger may report when a record cannot be written.
    pub enum LogError {
        /// The sink rejected or dropped the record.
        Sink { message: String } => "log sink failed: {message}",
    }
}

/// Structured logger receiving one record per handler transition.
pub trait Logger: Send + Sync {
    /// Write a record with a JSON payload.
    fn log(&self, level: LogLevel, message: &str, payload: &Value) -> Result<(), LogError>;
}

/// Logger emitting `tracing` events under the `proxy` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, payload: &Value) -> Result<(), LogError> {
        match level {
            LogLevel::Info => info!(target: "proxy", %payload, "{message}"),
            LogLevel::Warn => warn!(target: "proxy", %payload, "{message}"),
            LogLevel::Error => error!(target: "proxy", %payload, "{message}"),
        }
        Ok(())
    }
}
