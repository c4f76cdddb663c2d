//! "Show user" use case.
//!
//! Validates the requested identifier, resolves it through the
//! [`UserOfId`] port, and classifies the answer:
//!
//! ```text
//! invalid id      -> Failure(InvalidUserId)   (port not called)
//! port: None      -> Failure(UserNotFound)
//! port: Some(u)   -> Success(u)
//! port: Err(e)    -> Err(Fault)               (not a business outcome)
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::macros::define_business_error;
use crate::domain::ports::{ServiceOutput, UserOfId};
use crate::domain::{Fault, Outcome, User, UserId};

/// Command extracted from the transport event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowUserCommand {
    /// Raw identifier as received; validated by the service.
    pub user_id: String,
}

impl ShowUserCommand {
    /// Build a command for the given raw identifier.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

define_business_error! {
    /// Business failures of the "show user" use case.
    pub enum ShowUserFailure {
        /// The requested identifier is empty or malformed.
        InvalidUserId { reason: String } => "invalid user id: {reason}",
        /// No user is stored under the requested identifier.
        UserNotFound { user_id: String } => "user not found: {user_id}",
    }
}

/// Application service wiring the "show user" use case to its port.
pub struct ShowUserService<R: ?Sized> {
    user_of_id: Arc<R>,
}

impl<R: ?Sized> Clone for ShowUserService<R> {
    fn clone(&self) -> Self {
        Self {
            user_of_id: Arc::clone(&self.user_of_id),
        }
    }
}

impl<R: ?Sized> ShowUserService<R> {
    /// Create the service around its lookup port.
    pub const fn new(user_of_id: Arc<R>) -> Self {
        Self { user_of_id }
    }
}

#[async_trait]
impl<R> ServiceOutput<ShowUserCommand> for ShowUserService<R>
where
    R: UserOfId + ?Sized,
{
    type Failure = ShowUserFailure;
    type Value = User;

    async fn invoke(&self, command: ShowUserCommand) -> Result<Outcome<ShowUserFailure, User>, Fault> {
        let user_id = match UserId::new(&command.user_id) {
            Ok(user_id) => user_id,
            Err(err) => {
                return Ok(Outcome::Failure(ShowUserFailure::invalid_user_id(
                    err.to_string(),
                )));
            }
        };

        debug!(user_id = %user_id, "resolving user");
        let user = self.user_of_id.user_of_id(&user_id).await?;

        Ok(match user {
            Some(user) => Outcome::Success(user),
            None => Outcome::Failure(ShowUserFailure::user_not_found(user_id)),
        })
    }
}

#[cfg(test)]
#[path = "show_user_tests.rs"]
mod tests;
