//! Transport event handed to the proxy handler.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-request metadata attached by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Correlation identifier for logs.
    pub request_id: String,
}

/// Transport-neutral request, shaped after an API gateway proxy event.
///
/// Inbound adapters build one per request; command extractors read from it
/// and must not fail, so missing parameters surface as empty values that the
/// use case rejects during validation.
///
/// # Examples
/// ```
/// use user_directory::inbound::proxy::ProxyEvent;
///
/// let event = ProxyEvent::new("GET", "/users/ada").with_path_parameter("userId", "ada");
/// assert_eq!(event.path_parameter("userId"), Some("ada"));
/// assert_eq!(event.path_parameter("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub path_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub query_string_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub request_context: RequestContext,
}

impl ProxyEvent {
    /// Create an event with a freshly generated request identifier.
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            path: path.into(),
            path_parameters: BTreeMap::new(),
            query_string_parameters: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
            request_context: RequestContext {
                request_id: Uuid::new_v4().to_string(),
            },
        }
    }

    /// Attach a path parameter.
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Attach a query string parameter.
    pub fn with_query_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query_string_parameters.insert(name.into(), value.into());
        self
    }

    /// Attach a header. Names are stored lower-cased.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Attach a raw request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Override the generated request identifier.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_context.request_id = request_id.into();
        self
    }

    /// Look up a path parameter by name.
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.get(name).map(String::as_str)
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Correlation identifier for this request.
    pub fn request_id(&self) -> &str {
        self.request_context.request_id.as_str()
    }
}
