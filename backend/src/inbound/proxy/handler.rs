//! Generic proxy handler driving a use case from event to response.
//!
//! ```text
//! Received -> CommandExtracted -> Invoked -> Succeeded      -> Responded
//!                                         -> BusinessFailed -> Responded
//!                                         -> SystemErrored  -> Responded
//! ```
//!
//! `SystemErrored` is entered when the service returns `Err(Fault)` or when
//! anything in the pipeline panics; both are caught once, around the whole
//! dispatch.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures_util::FutureExt;
use serde_json::{Value, json};
use tracing::{Instrument, debug, info_span};

use crate::domain::ports::ServiceOutput;
use crate::domain::{BusinessError, Fault, Outcome};

use super::event::ProxyEvent;
use super::logger::{LogLevel, Logger, TracingLogger};
use super::render::{FailureRenderer, ServiceCommand, SuccessRenderer, UnknownErrorRenderer};
use super::response::ProxyResponse;

/// Parameter object bundling everything a [`ProxyHandler`] is built from.
pub struct ProxyHandlerParts<C, S>
where
    C: Send + 'static,
    S: ServiceOutput<C>,
{
    pub service_command: Box<dyn ServiceCommand<C>>,
    pub service_output: S,
    pub failure_response: Box<dyn FailureRenderer<S::Failure>>,
    pub success_response: Box<dyn SuccessRenderer<S::Value>>,
    pub unknown_error_response: Box<dyn UnknownErrorRenderer>,
    /// Defaults to [`TracingLogger`] when `None`.
    pub logger: Option<Arc<dyn Logger>>,
}

/// Adapter turning a [`ProxyEvent`] into exactly one [`ProxyResponse`].
///
/// The handler never looks inside success values or failures beyond handing
/// them to the injected renderers, so one implementation serves every use
/// case.
pub struct ProxyHandler<C, S>
where
    C: Send + 'static,
    S: ServiceOutput<C>,
{
    service_command: Box<dyn ServiceCommand<C>>,
    service_output: S,
    failure_response: Box<dyn FailureRenderer<S::Failure>>,
    success_response: Box<dyn SuccessRenderer<S::Value>>,
    unknown_error_response: Box<dyn UnknownErrorRenderer>,
    logger: Arc<dyn Logger>,
}

impl<C, S> ProxyHandler<C, S>
where
    C: Send + 'static,
    S: ServiceOutput<C>,
{
    /// Assemble a handler from its parts.
    pub fn new(parts: ProxyHandlerParts<C, S>) -> Self {
        let ProxyHandlerParts {
            service_command,
            service_output,
            failure_response,
            success_response,
            unknown_error_response,
            logger,
        } = parts;

        Self {
            service_command,
            service_output,
            failure_response,
            success_response,
            unknown_error_response,
            logger: logger.unwrap_or_else(|| Arc::new(TracingLogger)),
        }
    }

    /// Handle one event. Always returns a response.
    pub async fn handle(&self, event: &ProxyEvent) -> ProxyResponse {
        let span = info_span!("proxy_handler", request_id = %event.request_id());
        let dispatched = AssertUnwindSafe(self.dispatch(event))
            .catch_unwind()
            .instrument(span.clone())
            .await;

        span.in_scope(|| match dispatched {
            Ok(Ok(response)) => response,
            Ok(Err(fault)) => self.respond_unknown(&fault),
            Err(payload) => self.respond_unknown(&Fault::from_panic(payload)),
        })
    }

    async fn dispatch(&self, event: &ProxyEvent) -> Result<ProxyResponse, Fault> {
        self.record(LogLevel::Info, "request received", || {
            serde_json::to_value(event).unwrap_or_default()
        });

        let command = self.service_command.extract(event);
        let outcome = self.service_output.invoke(command).await?;

        Ok(match outcome {
            Outcome::Failure(failure) => {
                self.record(LogLevel::Warn, "business failure", || {
                    json!({ "name": failure.name(), "message": failure.message() })
                });
                self.failure_response.render(failure).into()
            }
            Outcome::Success(value) => {
                let response = ProxyResponse::from(self.success_response.render(value));
                self.record(LogLevel::Info, "request succeeded", || {
                    json!({ "statusCode": response.status_code })
                });
                response
            }
        })
    }

    fn respond_unknown(&self, fault: &Fault) -> ProxyResponse {
        self.record(LogLevel::Error, "unknown error", || {
            json!({ "error": fault.to_string() })
        });

        panic::catch_unwind(AssertUnwindSafe(|| {
            ProxyResponse::from(self.unknown_error_response.render(fault))
        }))
        .unwrap_or_else(|_| ProxyResponse::fallback())
    }

    /// Write a log record, swallowing logger errors and panics.
    fn record(&self, level: LogLevel, message: &str, payload: impl FnOnce() -> Value) {
        let written = panic::catch_unwind(AssertUnwindSafe(|| {
            self.logger.log(level, message, &payload())
        }));
        match written {
            Ok(Ok(())) => {}
            Ok(Err(err)) => debug!(error = %err, record = message, "invocation log record dropped"),
            Err(_) => debug!(record = message, "invocation logger panicked"),
        }
    }
}
