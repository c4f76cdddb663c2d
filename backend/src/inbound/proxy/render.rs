//! Injected capabilities of the proxy handler.
//!
//! Each trait has a blanket implementation for matching closures and `fn`
//! items, so a use case's wiring module can pass plain functions.

use crate::domain::{BusinessError, Fault};

use super::event::ProxyEvent;
use super::response::{ErrorResponse, FailureResponse, SuccessResponse};

/// Extracts a domain command from a transport event. Must be total.
pub trait ServiceCommand<C>: Send + Sync {
    /// Build the command for this event.
    fn extract(&self, event: &ProxyEvent) -> C;
}

impl<C, F> ServiceCommand<C> for F
where
    F: Fn(&ProxyEvent) -> C + Send + Sync,
{
    fn extract(&self, event: &ProxyEvent) -> C {
        self(event)
    }
}

/// Renders a success value.
pub trait SuccessRenderer<U>: Send + Sync {
    /// Build the success response for `value`.
    fn render(&self, value: U) -> SuccessResponse;
}

impl<U, F> SuccessRenderer<U> for F
where
    F: Fn(U) -> SuccessResponse + Send + Sync,
{
    fn render(&self, value: U) -> SuccessResponse {
        self(value)
    }
}

/// Renders a business failure.
///
/// Implementations match exhaustively on the use case's failure enum so a new
/// variant fails the build until it has a status.
pub trait FailureRenderer<E: BusinessError>: Send + Sync {
    /// Build the failure response for `failure`.
    fn render(&self, failure: E) -> FailureResponse;
}

impl<E, F> FailureRenderer<E> for F
where
    E: BusinessError,
    F: Fn(E) -> FailureResponse + Send + Sync,
{
    fn render(&self, failure: E) -> FailureResponse {
        self(failure)
    }
}

/// Renders a system fault into the fixed internal-error shape.
///
/// The fault is opaque: implementations must not derive the body from it.
pub trait UnknownErrorRenderer: Send + Sync {
    /// Build the internal-error response.
    fn render(&self, fault: &Fault) -> ErrorResponse;
}

impl<F> UnknownErrorRenderer for F
where
    F: Fn(&Fault) -> ErrorResponse + Send + Sync,
{
    fn render(&self, fault: &Fault) -> ErrorResponse {
        self(fault)
    }
}
