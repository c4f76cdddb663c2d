//! JSON bodies rendered by the HTTP endpoints.
//!
//! These types own both the wire shape (via serde) and the OpenAPI schema
//! (via utoipa), so the documented contract cannot drift from what the
//! renderers emit.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a successful user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowUserBody {
    /// Identifier of the resolved user.
    #[schema(example = "Dummy User")]
    pub user_id: String,
}

/// Body of every business failure and system error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// Human-readable message.
    #[schema(example = "user not found: Dummy User")]
    pub message: String,
}

impl MessageBody {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
