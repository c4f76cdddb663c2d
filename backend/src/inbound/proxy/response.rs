//! Response envelope and the typed status partitions feeding it.
//!
//! Success, business-failure and system-error statuses live in three
//! disjoint enums. Each renderer returns a response typed by its partition,
//! so a success renderer cannot produce a 404 and a failure renderer cannot
//! produce a 500.

use serde::{Deserialize, Serialize};
use tracing::error;

/// Statuses a success renderer may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessStatus {
    Ok,
    Created,
}

impl SuccessStatus {
    /// Every member of the partition.
    pub const ALL: [Self; 2] = [Self::Ok, Self::Created];

    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
        }
    }
}

/// Statuses a business-failure renderer may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStatus {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
}

impl FailureStatus {
    /// Every member of the partition.
    pub const ALL: [Self; 5] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
    ];

    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
        }
    }
}

/// Statuses reserved for system errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    InternalServerError,
}

impl ErrorStatus {
    /// Every member of the partition.
    pub const ALL: [Self; 1] = [Self::InternalServerError];

    /// Numeric HTTP status code.
    pub const fn code(self) -> u16 {
        match self {
            Self::InternalServerError => 500,
        }
    }
}

/// Response produced by a success renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    pub status: SuccessStatus,
    pub body: String,
}

/// Response produced by a business-failure renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    pub status: FailureStatus,
    pub body: String,
}

/// Response produced by the unknown-error renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: ErrorStatus,
    pub body: String,
}

/// Transport response envelope: a status code and a JSON body string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub body: String,
}

impl ProxyResponse {
    /// Last-resort response used when the unknown-error renderer itself
    /// panics.
    pub(crate) fn fallback() -> Self {
        Self {
            status_code: ErrorStatus::InternalServerError.code(),
            body: response_body(&serde_json::json!({ "message": "Internal Server Error" })),
        }
    }
}

impl From<SuccessResponse> for ProxyResponse {
    fn from(value: SuccessResponse) -> Self {
        Self {
            status_code: value.status.code(),
            body: value.body,
        }
    }
}

impl From<FailureResponse> for ProxyResponse {
    fn from(value: FailureResponse) -> Self {
        Self {
            status_code: value.status.code(),
            body: value.body,
        }
    }
}

impl From<ErrorResponse> for ProxyResponse {
    fn from(value: ErrorResponse) -> Self {
        Self {
            status_code: value.status.code(),
            body: value.body,
        }
    }
}

/// Serialise a response body to a JSON string.
///
/// Serialisation of plain body structs cannot fail; if a custom
/// `Serialize` implementation errors anyway the failure is logged and an
/// empty JSON object is returned.
///
/// # Examples
/// ```
/// use serde::Serialize;
/// use user_directory::inbound::proxy::response_body;
///
/// #[derive(Serialize)]
/// struct Body<'a> {
///     message: &'a str,
/// }
///
/// assert_eq!(response_body(&Body { message: "hi" }), r#"{"message":"hi"}"#);
/// ```
pub fn response_body<T: Serialize + ?Sized>(body: &T) -> String {
    serde_json::to_string(body).unwrap_or_else(|err| {
        error!(error = %err, "response body serialisation failed");
        String::from("{}")
    })
}
