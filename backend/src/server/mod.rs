//! Server construction and route wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{build_directory_client, build_http_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use user_directory::doc::ApiDoc;
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users::show_user;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().app_data(http_state).service(show_user);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the directory client cannot be built
/// or binding the socket fails.
pub async fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let client = build_directory_client(&config).await?;
    let http_state = build_http_state(&config, client);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr())?
        .run();

    Ok(server)
}
