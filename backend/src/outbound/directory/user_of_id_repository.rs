//! Directory-backed `UserOfId` adapter.
//!
//! Users live in a configured table keyed by their identifier; each item is a
//! JSON object such as `{"userId": "ada"}`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{UserDirectoryError, UserOfId};
use crate::domain::{User, UserId};

use super::client::{DirectoryClient, DirectoryClientError, DirectoryItem};

/// Repository resolving users from a [`DirectoryClient`] table.
#[derive(Clone)]
pub struct UserOfIdRepository {
    table_name: String,
    client: Arc<dyn DirectoryClient>,
}

impl UserOfIdRepository {
    /// Create a repository reading from `table_name`.
    pub fn new(table_name: impl Into<String>, client: Arc<dyn DirectoryClient>) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    /// Table this repository reads from.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn map_client_error(error: DirectoryClientError) -> UserDirectoryError {
    match error {
        DirectoryClientError::Connection { message } => UserDirectoryError::connection(message),
        DirectoryClientError::Request { message } => UserDirectoryError::query(message),
        DirectoryClientError::Encoding { message } => UserDirectoryError::decode(message),
    }
}

fn decode_user(item: DirectoryItem) -> Result<User, UserDirectoryError> {
    serde_json::from_value(Value::Object(item))
        .map_err(|err| UserDirectoryError::decode(err.to_string()))
}

#[async_trait]
impl UserOfId for UserOfIdRepository {
    async fn user_of_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        let item = self
            .client
            .get_item(&self.table_name, id.as_ref())
            .await
            .map_err(map_client_error)?;

        item.map(decode_user).transpose()
    }
}
