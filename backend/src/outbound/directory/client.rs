//! Document-style client for the user directory store.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::macros::define_port_error;

/// A stored item: a JSON object of attributes.
pub type DirectoryItem = Map<String, Value>;

define_port_error! {
    /// Errors raised by directory clients.
    pub enum DirectoryClientError {
        /// The store could not be reached or no connection was available.
        Connection { message: String } => "directory connection failed: {message}",
        /// The store rejected or failed the request.
        Request { message: String } => "directory request failed: {message}",
        /// A stored value is not a JSON object.
        Encoding { message: String } => "directory item encoding invalid: {message}",
    }
}

/// Reads items from a key/value directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch the item stored under `key` in `table_name`.
    async fn get_item(
        &self,
        table_name: &str,
        key: &str,
    ) -> Result<Option<DirectoryItem>, DirectoryClientError>;
}
