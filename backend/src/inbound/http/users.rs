//! Users API handlers.
//!
//! ```text
//! GET /users/{userId}
//! ```

use actix_web::{HttpRequest, get, web};

use crate::inbound::http::event::proxy_event;
use crate::inbound::http::schemas::{MessageBody, ShowUserBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::proxy::ProxyResponse;

/// Look a user up by identifier.
///
/// The status and body come straight from the proxy handler's envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users::show_user;
///
/// let app = App::new().service(show_user);
/// ```
#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "Identifier of the user to show")),
    responses(
        (status = 200, description = "User found", body = ShowUserBody),
        (status = 400, description = "Invalid user id", body = MessageBody),
        (status = 404, description = "User not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{userId}")]
pub async fn show_user(req: HttpRequest, state: web::Data<HttpState>) -> ProxyResponse {
    let event = proxy_event(&req, b"");
    state.show_user.handle(&event).await
}
