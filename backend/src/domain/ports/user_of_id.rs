//! Driven port for looking a user up in the directory.
//!
//! Application services call this port with an already validated
//! [`UserId`]. Absence is an ordinary answer (`Ok(None)`); an `Err` means the
//! directory itself could not answer and is treated as a system fault by the
//! caller.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory adapters while resolving a user.
    pub enum UserDirectoryError {
        /// The directory store could not be reached.
        Connection { message: String } => "user directory connection failed: {message}",
        /// The lookup was issued but failed during execution.
        Query { message: String } => "user directory query failed: {message}",
        /// A stored item could not be decoded into a user.
        Decode { message: String } => "user directory item is malformed: {message}",
    }
}

/// Port resolving a user by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserOfId: Send + Sync {
    /// Return the user stored under `id`, or `None` when no such user exists.
    async fn user_of_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError>;
}

/// Fixture lookup backed by a fixed set of users.
#[derive(Debug, Default, Clone)]
pub struct FixtureUserOfId {
    users: HashMap<UserId, User>,
}

impl FixtureUserOfId {
    /// Build a fixture directory containing the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.user_id().clone(), user))
                .collect(),
        }
    }
}

#[async_trait]
impl UserOfId for FixtureUserOfId {
    async fn user_of_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user_id(raw: &str) -> UserId {
        UserId::new(raw).expect("valid user id")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_returns_known_users() {
        let user = User::new(user_id("Dummy User"));
        let directory = FixtureUserOfId::with_users([user.clone()]);

        let found = directory
            .user_of_id(&user_id("Dummy User"))
            .await
            .expect("fixture lookup");
        assert_eq!(found, Some(user));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_absence_as_none() {
        let directory = FixtureUserOfId::default();

        let found = directory
            .user_of_id(&user_id("Nobody"))
            .await
            .expect("fixture lookup");
        assert!(found.is_none());
    }

    #[rstest]
    fn error_messages_carry_context() {
        let err = UserDirectoryError::connection("redis refused");
        assert_eq!(
            err.to_string(),
            "user directory connection failed: redis refused"
        );
    }
}
