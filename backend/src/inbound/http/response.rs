//! Map proxy envelopes onto Actix responses.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::inbound::proxy::ProxyResponse;

impl From<ProxyResponse> for HttpResponse {
    fn from(value: ProxyResponse) -> Self {
        let status = StatusCode::from_u16(value.status_code).unwrap_or_else(|err| {
            error!(status_code = value.status_code, error = %err, "invalid status code in envelope");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(value.body)
    }
}

impl Responder for ProxyResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into()
    }
}
