//! Responders turn a request into a synthetic response.
//!
//! A responder stands in for the remote server. It is called once per
//! request, possibly from many tasks at the same time, so anything it
//! captures must be `Send + Sync`.

use http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use std::sync::Arc;

use crate::errors::HmockResult;
use crate::transport::{HttpRequest, HttpResponse, TEXT_PLAIN_UTF8};

/// Shared response-generation function.
pub type Responder = Arc<dyn Fn(&HttpRequest) -> HmockResult<HttpResponse> + Send + Sync>;

/// Wraps a closure or function as a [`Responder`].
pub fn responder_fn<F>(f: F) -> Responder
where
    F: Fn(&HttpRequest) -> HmockResult<HttpResponse> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Answers every request with an empty `200 OK` plain-text response.
pub fn respond_ok(_request: &HttpRequest) -> HmockResult<HttpResponse> {
    Ok(HttpResponse::ok()
        .with_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8))
        .with_header(CONTENT_LENGTH, HeaderValue::from_static("0")))
}

/// Returns the responder used when a configuration does not supply one.
pub fn default_responder() -> Responder {
    responder_fn(respond_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HmockError;
    use crate::transport::HttpMethod;
    use http::StatusCode;
    use test_case::test_case;
    use url::Url;

    #[test_case(HttpMethod::Get, "http://example.com" ; "get root")]
    #[test_case(HttpMethod::Post, "https://api.example.com/users/create" ; "post nested path")]
    #[test_case(HttpMethod::Delete, "http://localhost:8080/items/1?force=1" ; "delete with query")]
    fn test_default_responder_is_empty_ok(method: HttpMethod, url: &str) {
        let request = HttpRequest::new(method, Url::parse(url).unwrap());
        let response = default_responder()(&request).unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.is_empty());
        assert_eq!(response.header("content-type"), Some("text/plain; charset=utf-8"));
        assert_eq!(response.header("content-length"), Some("0"));
        assert_eq!(response.headers.len(), 2);
    }

    #[test]
    fn test_responder_fn_wraps_closure() {
        let responder = responder_fn(|req| {
            if req.path() == "/teapot" {
                Ok(HttpResponse::new(StatusCode::IM_A_TEAPOT))
            } else {
                Err(HmockError::responder("not found"))
            }
        });

        let teapot = HttpRequest::get(Url::parse("http://example.com/teapot").unwrap());
        assert_eq!(responder(&teapot).unwrap().status, StatusCode::IM_A_TEAPOT);

        let other = HttpRequest::get(Url::parse("http://example.com/other").unwrap());
        assert_eq!(responder(&other).unwrap_err().to_string(), "not found");
    }
}
