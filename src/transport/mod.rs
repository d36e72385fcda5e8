//! Transport layer for hmock.
//!
//! [`Transport`] is the single seam the client dispatches through. The
//! crate ships one implementation, [`MockTransport`], which never touches
//! the network.

mod http;
mod mock;

pub use self::http::{HttpMethod, HttpRequest, HttpResponse, APPLICATION_JSON, TEXT_PLAIN_UTF8};
pub use self::mock::MockTransport;

use async_trait::async_trait;

use crate::errors::HmockResult;

/// Resolves a request to a response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Handles one request.
    async fn handle(&self, request: &HttpRequest) -> HmockResult<HttpResponse>;
}
