//! In-memory directory client.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::client::{DirectoryClient, DirectoryClientError, DirectoryItem};

/// Directory client keeping items in a shared map.
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectoryClient {
    items: Arc<RwLock<HashMap<(String, String), DirectoryItem>>>,
}

impl InMemoryDirectoryClient {
    /// Create an empty client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `item` under `key` in `table_name`, replacing any previous item.
    pub async fn put_item(
        &self,
        table_name: impl Into<String>,
        key: impl Into<String>,
        item: DirectoryItem,
    ) {
        self.items
            .write()
            .await
            .insert((table_name.into(), key.into()), item);
    }
}

#[async_trait]
impl DirectoryClient for InMemoryDirectoryClient {
    async fn get_item(
        &self,
        table_name: &str,
        key: &str,
    ) -> Result<Option<DirectoryItem>, DirectoryClientError> {
        let items = self.items.read().await;
        Ok(items
            .get(&(table_name.to_owned(), key.to_owned()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn item(user_id: &str) -> DirectoryItem {
        json!({ "userId": user_id })
            .as_object()
            .cloned()
            .expect("literal is an object")
    }

    #[rstest]
    #[tokio::test]
    async fn stored_items_are_returned() {
        let client = InMemoryDirectoryClient::new();
        client.put_item("users", "ada", item("ada")).await;

        let found = client.get_item("users", "ada").await.expect("get succeeds");

        assert_eq!(found, Some(item("ada")));
    }

    #[rstest]
    #[tokio::test]
    async fn tables_are_isolated() {
        let client = InMemoryDirectoryClient::new();
        client.put_item("users", "ada", item("ada")).await;

        let found = client.get_item("admins", "ada").await.expect("get succeeds");

        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_storage() {
        let client = InMemoryDirectoryClient::new();
        let writer = client.clone();
        writer.put_item("users", "ada", item("ada")).await;

        let found = client.get_item("users", "ada").await.expect("get succeeds");

        assert!(found.is_some());
    }
}
