//! Responder-backed transport.

use async_trait::async_trait;
use std::sync::Arc;

use super::{HttpRequest, HttpResponse, Transport};
use crate::config::HmockConfig;
use crate::errors::HmockResult;
use crate::observability::Logger;
use crate::responder::{default_responder, Responder};

/// Transport that answers every request with the configured responder.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent requests. Each call to [`Transport::handle`] invokes the
/// responder exactly once and returns its result unchanged.
#[derive(Clone)]
pub struct MockTransport {
    responder: Responder,
    logger: Option<Arc<dyn Logger>>,
}

impl MockTransport {
    /// Creates a transport from a responder and an optional logger.
    pub fn new(responder: Responder, logger: Option<Arc<dyn Logger>>) -> Self {
        Self { responder, logger }
    }

    /// Creates a transport from a configuration, filling in the default
    /// responder when none is set.
    pub fn from_config(config: HmockConfig) -> Self {
        let HmockConfig { responder, logger } = config;
        Self::new(responder.unwrap_or_else(default_responder), logger)
    }

    /// Returns the logger, if diagnostics are enabled.
    pub fn logger(&self) -> Option<&Arc<dyn Logger>> {
        self.logger.as_ref()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::from_config(HmockConfig::default())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn handle(&self, request: &HttpRequest) -> HmockResult<HttpResponse> {
        if let Some(logger) = &self.logger {
            logger.debug(
                "handling HTTP request",
                &[
                    ("method", request.method.to_string()),
                    ("url", request.url.to_string()),
                ],
            );
        }

        let response = match (self.responder)(request) {
            Ok(response) => response,
            Err(error) => {
                if let Some(logger) = &self.logger {
                    logger.error("responder returned an error", &[("error", error.to_string())]);
                }
                return Err(error);
            }
        };

        if let Some(logger) = &self.logger {
            logger.debug(
                "returning response",
                &[("status", response.status.as_u16().to_string())],
            );
        }

        Ok(response)
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
