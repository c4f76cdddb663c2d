//! Driving port implemented by application services.
//!
//! The proxy handler only knows this trait: it hands over a command and gets
//! back either an [`Outcome`] or a [`Fault`]. Everything use-case specific
//! hides behind the associated types.

use async_trait::async_trait;

use crate::domain::{BusinessError, Fault, Outcome};

/// Invocation function of a single use case.
#[async_trait]
pub trait ServiceOutput<C>: Send + Sync
where
    C: Send + 'static,
{
    /// Closed set of business failures the use case may return.
    type Failure: BusinessError;
    /// Value produced on success.
    type Value: Send + 'static;

    /// Run the use case for one command.
    ///
    /// Returns `Ok(Outcome::Failure(_))` for documented business outcomes and
    /// `Err(Fault)` for anything else.
    async fn invoke(&self, command: C) -> Result<Outcome<Self::Failure, Self::Value>, Fault>;
}
