//! Request and response values passed through the transport.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use std::borrow::Cow;
use std::fmt;
use url::Url;

use crate::errors::{HmockError, HmockResult};

/// Content type used for plain-text bodies.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Content type used for JSON bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method.
///
/// Methods without a dedicated variant (`TRACE`, `CONNECT`, extension
/// methods) are carried by [`HttpMethod::Other`] so they still reach the
/// responder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET request.
    Get,
    /// HEAD request.
    Head,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
    /// OPTIONS request.
    Options,
    /// Any other method. Use `From<http::Method>` to build it so standard
    /// methods land on their own variant.
    Other(http::Method),
}

impl HttpMethod {
    /// Returns the canonical upper-case method name.
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(method) => method.as_str(),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Head => http::Method::HEAD,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Options => http::Method::OPTIONS,
            HttpMethod::Other(method) => method,
        }
    }
}

impl From<&http::Method> for HttpMethod {
    fn from(method: &http::Method) -> Self {
        match method.as_str() {
            "GET" => HttpMethod::Get,
            "HEAD" => HttpMethod::Head,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Other(method.clone()),
        }
    }
}

impl From<http::Method> for HttpMethod {
    fn from(method: http::Method) -> Self {
        HttpMethod::from(&method)
    }
}

/// An outgoing HTTP request.
///
/// The transport only ever reads a request; responders receive it by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body, empty when the request has none.
    pub body: Bytes,
}

impl HttpRequest {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Creates a new GET request.
    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a new POST request.
    pub fn post(url: Url) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Sets a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the URL path.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TryFrom<http::Request<Bytes>> for HttpRequest {
    type Error = HmockError;

    fn try_from(request: http::Request<Bytes>) -> Result<Self, Self::Error> {
        let (parts, body) = request.into_parts();
        let method = HttpMethod::from(&parts.method);
        let url = Url::parse(&parts.uri.to_string())?;

        Ok(Self {
            method,
            url,
            headers: parts.headers,
            body,
        })
    }
}

/// A synthetic HTTP response produced by a responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response with the given status, no headers and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Creates an empty `200 OK` response.
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Creates a plain-text response with `Content-Type` and `Content-Length` set.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(status)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8))
            .with_header(CONTENT_LENGTH, HeaderValue::from(body.len()))
            .with_body(body)
    }

    /// Creates a JSON response by serializing `value`.
    pub fn json<T: serde::Serialize>(status: StatusCode, value: &T) -> HmockResult<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(status)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .with_header(CONTENT_LENGTH, HeaderValue::from(body.len()))
            .with_body(body))
    }

    /// Sets a header, replacing any previous value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the response body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns true if the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parses the body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> HmockResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl From<HttpResponse> for http::Response<Bytes> {
    fn from(response: HttpResponse) -> Self {
        let mut converted = http::Response::new(response.body);
        *converted.status_mut() = response.status;
        *converted.headers_mut() = response.headers;
        converted
    }
}

impl From<HttpResponse> for reqwest::Response {
    fn from(response: HttpResponse) -> Self {
        reqwest::Response::from(http::Response::<Bytes>::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(http::Method::from(HttpMethod::Get), http::Method::GET);
        assert_eq!(http::Method::from(HttpMethod::Patch), http::Method::PATCH);
        assert_eq!(HttpMethod::from(&http::Method::DELETE), HttpMethod::Delete);
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn test_unlisted_methods_are_carried_through() {
        let connect = HttpMethod::from(http::Method::CONNECT);
        assert_eq!(connect, HttpMethod::Other(http::Method::CONNECT));
        assert_eq!(connect.as_str(), "CONNECT");

        let purge = http::Method::from_bytes(b"PURGE").unwrap();
        let method = HttpMethod::from(&purge);
        assert_eq!(method.to_string(), "PURGE");
        assert_eq!(http::Method::from(method), purge);
    }

    #[test]
    fn test_request_from_http_request_with_extension_method() {
        let original = http::Request::builder()
            .method("PURGE")
            .uri("https://example.com/cache/key")
            .body(Bytes::new())
            .unwrap();

        let request = HttpRequest::try_from(original).unwrap();
        assert_eq!(request.method.as_str(), "PURGE");
        assert_eq!(request.path(), "/cache/key");
    }

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::post(url("http://example.com/users/create?x=1"))
            .with_header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .with_body(r#"{"name":"hmock"}"#);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/users/create");
        assert_eq!(request.header("content-type"), Some(APPLICATION_JSON));
        assert_eq!(&request.body[..], br#"{"name":"hmock"}"#);
    }

    #[test]
    fn test_request_from_http_request() {
        let original = http::Request::builder()
            .method(http::Method::PUT)
            .uri("https://example.com/items/7")
            .header("x-trace", "abc")
            .body(Bytes::from_static(b"payload"))
            .unwrap();

        let request = HttpRequest::try_from(original).unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url.as_str(), "https://example.com/items/7");
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(&request.body[..], b"payload");
    }

    #[test]
    fn test_request_from_relative_http_request_fails() {
        let original = http::Request::builder()
            .uri("/relative")
            .body(Bytes::new())
            .unwrap();

        let result = HttpRequest::try_from(original);
        assert!(matches!(result, Err(HmockError::InvalidRequest { .. })));
    }

    #[test]
    fn test_text_response_sets_headers() {
        let response = HttpResponse::text(StatusCode::CREATED, "hello");
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.header("content-type"), Some(TEXT_PLAIN_UTF8));
        assert_eq!(response.header("content-length"), Some("5"));
        assert_eq!(response.body_text(), "hello");
        assert!(response.is_success());
    }

    #[test]
    fn test_json_response_round_trips_value() {
        let value = serde_json::json!({"name": "hmock"});
        let response = HttpResponse::json(StatusCode::OK, &value).unwrap();

        assert_eq!(response.header("content-type"), Some(APPLICATION_JSON));
        let parsed: serde_json::Value = response.json_body().unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_json_body_rejects_invalid_json() {
        let response = HttpResponse::ok().with_body("not json");
        let result = response.json_body::<serde_json::Value>();
        assert!(matches!(result, Err(HmockError::Serialization { .. })));
    }

    #[test]
    fn test_into_http_response() {
        let response = HttpResponse::text(StatusCode::NOT_FOUND, "missing");
        let converted: http::Response<Bytes> = response.into();

        assert_eq!(converted.status(), StatusCode::NOT_FOUND);
        assert_eq!(converted.headers()["content-length"], "7");
        assert_eq!(&converted.body()[..], b"missing");
    }

    #[tokio::test]
    async fn test_into_reqwest_response() {
        let response = HttpResponse::text(StatusCode::ACCEPTED, "queued");
        let converted: reqwest::Response = response.into();

        assert_eq!(converted.status().as_u16(), 202);
        assert_eq!(converted.text().await.unwrap(), "queued");
    }
}
