//! Entry point that assembles a ready-to-use mocked client.

use std::sync::Arc;

use crate::client::HttpClient;
use crate::config::HmockConfig;
use crate::transport::MockTransport;

/// A mocked HTTP client together with the transport behind it.
///
/// # Example
///
/// ```rust
/// use hmock::{Hmock, HmockConfig, HmockError, HttpResponse};
/// use http::StatusCode;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), HmockError> {
/// let mock = Hmock::new(
///     HmockConfig::builder()
///         .responder(|req| match req.path() {
///             "/users" => Ok(HttpResponse::text(StatusCode::OK, r#"[{"name": "byterio"}]"#)),
///             _ => Err(HmockError::responder("not found")),
///         })
///         .build(),
/// );
///
/// let response = mock.client().get("http://example.com/users").await?;
/// assert_eq!(response.status, StatusCode::OK);
/// # Ok(())
/// # }
/// ```
pub struct Hmock {
    client: HttpClient,
    transport: Arc<MockTransport>,
}

impl Hmock {
    /// Builds a client from `config`, substituting defaults for unset fields.
    pub fn new(config: HmockConfig) -> Self {
        let transport = Arc::new(MockTransport::from_config(config));
        let client = HttpClient::with_transport(transport.clone());

        if let Some(logger) = transport.logger() {
            logger.debug("hmock is initialized", &[]);
        }

        Self { client, transport }
    }

    /// Returns the HTTP client used by hmock.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Consumes the handle and returns the client.
    pub fn into_client(self) -> HttpClient {
        self.client
    }

    /// Returns the transport installed in the client.
    pub fn transport(&self) -> &Arc<MockTransport> {
        &self.transport
    }

    /// Returns true if diagnostics are enabled.
    pub fn has_logger(&self) -> bool {
        self.transport.logger().is_some()
    }
}

impl Default for Hmock {
    fn default() -> Self {
        Self::new(HmockConfig::default())
    }
}

impl std::fmt::Debug for Hmock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hmock")
            .field("transport", &self.transport)
            .finish()
    }
}
