//! Transport-neutral proxy adapter.
//!
//! A [`ProxyHandler`] turns one [`ProxyEvent`] into exactly one
//! [`ProxyResponse`] by extracting a command, invoking an application service
//! and handing the typed result to the matching renderer. Transport adapters
//! (see [`crate::inbound::http`]) only translate to and from these envelopes.

mod event;
mod handler;
mod logger;
mod render;
mod response;

pub use event::{ProxyEvent, RequestContext};
pub use handler::{ProxyHandler, ProxyHandlerParts};
pub use logger::{LogError, LogLevel, Logger, TracingLogger};
pub use render::{FailureRenderer, ServiceCommand, SuccessRenderer, UnknownErrorRenderer};
pub use response::{
    ErrorResponse, ErrorStatus, FailureResponse, FailureStatus, ProxyResponse, SuccessResponse,
    SuccessStatus, response_body,
};
