//! Build transport-neutral events from Actix requests.

use std::collections::BTreeMap;

use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::inbound::proxy::ProxyEvent;

/// Header carrying a caller-supplied correlation identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Headers never copied into the event; the event is logged verbatim.
const REDACTED_HEADERS: [&str; 2] = ["authorization", "cookie"];

/// Translate an Actix request into a [`ProxyEvent`].
///
/// Path parameters come from the matched route, query parameters from the
/// query string. Header values that are not visible ASCII are skipped. The
/// request id is taken from [`REQUEST_ID_HEADER`] when present, otherwise a
/// fresh one is generated.
pub fn proxy_event(req: &HttpRequest, body: &[u8]) -> ProxyEvent {
    let mut event = ProxyEvent::new(req.method().as_str(), req.path());

    for (name, value) in req.match_info().iter() {
        event = event.with_path_parameter(name, value);
    }

    match web::Query::<BTreeMap<String, String>>::from_query(req.query_string()) {
        Ok(query) => {
            for (name, value) in query.into_inner() {
                event = event.with_query_parameter(name, value);
            }
        }
        Err(err) => debug!(error = %err, "ignoring malformed query string"),
    }

    for (name, value) in req.headers() {
        if REDACTED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        if let Ok(value) = value.to_str() {
            event = event.with_header(name.as_str(), value);
        }
    }

    if let Some(request_id) = event
        .header(REQUEST_ID_HEADER)
        .filter(|id| !id.trim().is_empty())
        .map(str::to_owned)
    {
        event = event.with_request_id(request_id);
    }

    if !body.is_empty() {
        event = event.with_body(String::from_utf8_lossy(body));
    }

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn copies_path_query_and_headers() {
        let req = TestRequest::get()
            .uri("/users/ada?verbose=true")
            .param("userId", "ada")
            .insert_header(("X-Request-Id", "req-42"))
            .insert_header(("Accept", "application/json"))
            .to_http_request();

        let event = proxy_event(&req, b"");

        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path, "/users/ada");
        assert_eq!(event.path_parameter("userId"), Some("ada"));
        assert_eq!(
            event.query_string_parameters.get("verbose").map(String::as_str),
            Some("true")
        );
        assert_eq!(event.header("accept"), Some("application/json"));
        assert_eq!(event.request_id(), "req-42");
        assert!(event.body.is_none());
    }

    #[rstest]
    #[case("authorization", "Bearer secret")]
    #[case("cookie", "session=secret")]
    fn credentials_never_reach_the_event(#[case] name: &str, #[case] value: &str) {
        let req = TestRequest::get()
            .uri("/users/ada")
            .insert_header((name, value))
            .to_http_request();

        let event = proxy_event(&req, b"");

        assert!(event.header(name).is_none());
    }

    #[rstest]
    fn generates_a_request_id_when_absent() {
        let req = TestRequest::get().uri("/users/ada").to_http_request();

        let event = proxy_event(&req, b"");

        assert!(!event.request_id().is_empty());
    }

    #[rstest]
    fn keeps_a_non_empty_body() {
        let req = TestRequest::post().uri("/users").to_http_request();

        let event = proxy_event(&req, br#"{"userId":"ada"}"#);

        assert_eq!(event.body.as_deref(), Some(r#"{"userId":"ada"}"#));
    }
}
