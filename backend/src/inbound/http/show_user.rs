//! Wiring of the "show user" use case into a [`ProxyHandler`].
//!
//! ```text
//! GET /users/{userId}
//!   Success(user)            -> 200 {"userId": "..."}
//!   Failure(InvalidUserId)   -> 400 {"message": "..."}
//!   Failure(UserNotFound)    -> 404 {"message": "..."}
//!   fault or panic           -> 500 {"message": "Unknown Error"}
//! ```

use std::sync::Arc;

use crate::domain::ports::UserOfId;
use crate::domain::{
    BusinessError, Fault, ShowUserCommand, ShowUserFailure, ShowUserService, User,
};
use crate::inbound::proxy::{
    ErrorResponse, ErrorStatus, FailureResponse, FailureStatus, Logger, ProxyEvent, ProxyHandler,
    ProxyHandlerParts, SuccessResponse, SuccessStatus, response_body,
};

use super::schemas::{MessageBody, ShowUserBody};

/// Name of the path parameter carrying the requested identifier.
pub const USER_ID_PARAM: &str = "userId";

/// Fixed message returned for every system error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Handler type serving the "show user" endpoint.
pub type ShowUserHandler = ProxyHandler<ShowUserCommand, ShowUserService<dyn UserOfId>>;

/// Read the requested identifier; a missing parameter becomes an empty id.
pub fn service_command(event: &ProxyEvent) -> ShowUserCommand {
    ShowUserCommand::new(event.path_parameter(USER_ID_PARAM).unwrap_or_default())
}

/// Render a found user as `200 {"userId": ...}`.
pub fn success_response(user: User) -> SuccessResponse {
    SuccessResponse {
        status: SuccessStatus::Ok,
        body: response_body(&ShowUserBody {
            user_id: user.user_id().to_string(),
        }),
    }
}

/// Map each failure to its status; the match is exhaustive.
pub fn failure_response(failure: ShowUserFailure) -> FailureResponse {
    let status = match &failure {
        ShowUserFailure::InvalidUserId { .. } => FailureStatus::BadRequest,
        ShowUserFailure::UserNotFound { .. } => FailureStatus::NotFound,
    };

    FailureResponse {
        status,
        body: response_body(&MessageBody::new(failure.message())),
    }
}

/// The fault is deliberately ignored so no internal detail reaches clients.
pub fn unknown_error_response(_fault: &Fault) -> ErrorResponse {
    ErrorResponse {
        status: ErrorStatus::InternalServerError,
        body: response_body(&MessageBody::new(UNKNOWN_ERROR_MESSAGE)),
    }
}

/// Assemble the "show user" handler around a directory port.
///
/// `logger` defaults to the tracing-backed logger when `None`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use user_directory::domain::ports::FixtureUserOfId;
/// use user_directory::inbound::http::show_user::show_user_handler;
///
/// let handler = show_user_handler(Arc::new(FixtureUserOfId::default()), None);
/// # let _ = handler;
/// ```
pub fn show_user_handler(
    user_of_id: Arc<dyn UserOfId>,
    logger: Option<Arc<dyn Logger>>,
) -> ShowUserHandler {
    ProxyHandler::new(ProxyHandlerParts {
        service_command: Box::new(service_command),
        service_output: ShowUserService::new(user_of_id),
        failure_response: Box::new(failure_response),
        success_response: Box::new(success_response),
        unknown_error_response: Box::new(unknown_error_response),
        logger,
    })
}
