//! HTTP client backed by a [`Transport`].
//!
//! Mirrors the shape of an ordinary HTTP client: one method per verb, each
//! resolving to a response or an error. Every request is handed to the
//! installed transport; nothing is sent over the network.

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use std::sync::Arc;
use url::Url;

use crate::errors::{HmockError, HmockResult};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport, APPLICATION_JSON};

/// HTTP client whose dispatch goes through a [`Transport`].
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    /// Creates a client dispatching through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Returns the transport backing this client.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Sends a prepared request.
    pub async fn send(&self, request: HttpRequest) -> HmockResult<HttpResponse> {
        self.transport.handle(&request).await
    }

    /// Issues a GET request.
    pub async fn get(&self, url: &str) -> HmockResult<HttpResponse> {
        self.send(HttpRequest::new(HttpMethod::Get, Url::parse(url)?)).await
    }

    /// Issues a HEAD request.
    pub async fn head(&self, url: &str) -> HmockResult<HttpResponse> {
        self.send(HttpRequest::new(HttpMethod::Head, Url::parse(url)?)).await
    }

    /// Issues a POST request with the given content type and body.
    pub async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: impl Into<Bytes>,
    ) -> HmockResult<HttpResponse> {
        let request = HttpRequest::new(HttpMethod::Post, Url::parse(url)?);
        self.send(with_content(request, content_type, body)?).await
    }

    /// Issues a POST request with `value` serialized as JSON.
    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        value: &T,
    ) -> HmockResult<HttpResponse> {
        let body = serde_json::to_vec(value)?;
        self.post(url, APPLICATION_JSON, body).await
    }

    /// Issues a PUT request with the given content type and body.
    pub async fn put(
        &self,
        url: &str,
        content_type: &str,
        body: impl Into<Bytes>,
    ) -> HmockResult<HttpResponse> {
        let request = HttpRequest::new(HttpMethod::Put, Url::parse(url)?);
        self.send(with_content(request, content_type, body)?).await
    }

    /// Issues a PATCH request with the given content type and body.
    pub async fn patch(
        &self,
        url: &str,
        content_type: &str,
        body: impl Into<Bytes>,
    ) -> HmockResult<HttpResponse> {
        let request = HttpRequest::new(HttpMethod::Patch, Url::parse(url)?);
        self.send(with_content(request, content_type, body)?).await
    }

    /// Issues a DELETE request.
    pub async fn delete(&self, url: &str) -> HmockResult<HttpResponse> {
        self.send(HttpRequest::new(HttpMethod::Delete, Url::parse(url)?)).await
    }
}

/// Attaches a body and its content type to a request.
fn with_content(
    request: HttpRequest,
    content_type: &str,
    body: impl Into<Bytes>,
) -> HmockResult<HttpRequest> {
    let content_type = HeaderValue::from_str(content_type)
        .map_err(|e| HmockError::invalid_request(format!("Invalid content type: {}", e)))?;

    Ok(request.with_header(CONTENT_TYPE, content_type).with_body(body))
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::responder_fn;
    use crate::transport::MockTransport;
    use http::StatusCode;

    /// Echoes the method, path and content type back in the body.
    fn echo_client() -> HttpClient {
        let transport = MockTransport::new(
            responder_fn(|req| {
                let body = format!(
                    "{} {} {} {}",
                    req.method,
                    req.path(),
                    req.header("content-type").unwrap_or("-"),
                    String::from_utf8_lossy(&req.body)
                );
                Ok(HttpResponse::text(StatusCode::OK, body))
            }),
            None,
        );
        HttpClient::with_transport(Arc::new(transport))
    }

    #[tokio::test]
    async fn test_verbs_dispatch_with_expected_method() {
        let client = echo_client();

        let get = client.get("http://example.com/a").await.unwrap();
        assert_eq!(get.body_text(), "GET /a - ");

        let head = client.head("http://example.com/b").await.unwrap();
        assert_eq!(head.body_text(), "HEAD /b - ");

        let delete = client.delete("http://example.com/c").await.unwrap();
        assert_eq!(delete.body_text(), "DELETE /c - ");
    }

    #[tokio::test]
    async fn test_body_verbs_set_content_type() {
        let client = echo_client();

        let post = client
            .post("http://example.com/p", "text/plain", "hi")
            .await
            .unwrap();
        assert_eq!(post.body_text(), "POST /p text/plain hi");

        let put = client
            .put("http://example.com/q", "application/xml", "<a/>")
            .await
            .unwrap();
        assert_eq!(put.body_text(), "PUT /q application/xml <a/>");

        let patch = client
            .patch("http://example.com/r", "text/csv", "x,y")
            .await
            .unwrap();
        assert_eq!(patch.body_text(), "PATCH /r text/csv x,y");
    }

    #[tokio::test]
    async fn test_post_json_serializes_body() {
        let client = echo_client();
        let response = client
            .post_json("http://example.com/users/create", &serde_json::json!({"name": "hmock"}))
            .await
            .unwrap();

        assert_eq!(
            response.body_text(),
            r#"POST /users/create application/json {"name":"hmock"}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_transport() {
        let client = HttpClient::with_transport(Arc::new(MockTransport::new(
            responder_fn(|_| panic!("responder must not be called")),
            None,
        )));

        let result = client.get("not a url").await;
        assert!(matches!(result, Err(HmockError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn test_invalid_content_type_is_rejected() {
        let client = echo_client();
        let result = client.post("http://example.com/p", "bad\nvalue", "x").await;
        assert!(matches!(result, Err(HmockError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn test_clones_share_transport() {
        let client = echo_client();
        let clone = client.clone();
        assert!(Arc::ptr_eq(client.transport(), clone.transport()));
    }
}
