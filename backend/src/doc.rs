//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the user lookup endpoint from the inbound layer
//! - **Schemas**: the response bodies rendered by the proxy handlers
//!   ([`ShowUserBody`], [`MessageBody`])
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{MessageBody, ShowUserBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Look users up by identifier."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::users::show_user),
    components(schemas(ShowUserBody, MessageBody)),
    tags(
        (name = "users", description = "Operations related to users")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schemas.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_documents_the_user_lookup() {
        let doc = ApiDoc::openapi();
        let path = doc.paths.paths.get("/users/{userId}").expect("show user path");
        let operation = path.get.as_ref().expect("GET operation");

        for status in ["200", "400", "404", "500"] {
            assert!(
                operation.responses.responses.contains_key(status),
                "missing response {status}"
            );
        }
    }

    #[test]
    fn user_lookup_takes_no_request_body() {
        let doc = ApiDoc::openapi();
        let operation = doc
            .paths
            .paths
            .get("/users/{userId}")
            .and_then(|path| path.get.as_ref())
            .expect("GET operation");

        assert!(operation.request_body.is_none());
    }

    #[test]
    fn openapi_body_schemas_use_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        assert_object_schema_has_field(schemas.get("ShowUserBody").expect("body schema"), "userId");
        assert_object_schema_has_field(schemas.get("MessageBody").expect("body schema"), "message");
    }
}
