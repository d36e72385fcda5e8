//! Configuration for hmock.
//!
//! Every field is optional. An empty configuration answers every request
//! with an empty `200 OK` and emits no diagnostics.

use std::sync::Arc;

use crate::errors::HmockResult;
use crate::observability::{ConsoleLogger, LogConfig, LogLevel, Logger, TracingLogger};
use crate::responder::{responder_fn, Responder};
use crate::transport::{HttpRequest, HttpResponse};

/// Environment variable read by [`HmockConfig::from_env`].
pub const LOG_ENV_VAR: &str = "HMOCK_LOG";

/// Configuration for an hmock instance.
#[derive(Clone, Default)]
pub struct HmockConfig {
    /// Generates responses for requests. Defaults to an empty `200 OK`.
    pub responder: Option<Responder>,
    /// Optional diagnostic sink. Defaults to `None` (disabled).
    pub logger: Option<Arc<dyn Logger>>,
}

impl HmockConfig {
    /// Creates an all-defaults configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new configuration builder.
    pub fn builder() -> HmockConfigBuilder {
        HmockConfigBuilder::new()
    }

    /// Creates a configuration whose logger is chosen by `HMOCK_LOG`.
    ///
    /// # Environment Variables
    ///
    /// - `HMOCK_LOG` (optional): `tracing`, `console`, `console:<level>`
    ///   or `off`. Unset or unrecognised values leave diagnostics disabled.
    pub fn from_env() -> Self {
        let logger = std::env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|value| parse_logger(&value));

        Self {
            responder: None,
            logger,
        }
    }

    /// Returns true if a responder has been supplied.
    pub fn has_responder(&self) -> bool {
        self.responder.is_some()
    }

    /// Returns true if a logger has been supplied.
    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }
}

/// Parses a `HMOCK_LOG` value into a logger.
fn parse_logger(value: &str) -> Option<Arc<dyn Logger>> {
    let value = value.trim();
    let (kind, level) = match value.split_once(':') {
        Some((kind, level)) => (kind, Some(level)),
        None => (value, None),
    };

    let logger: Arc<dyn Logger> = match kind.to_lowercase().as_str() {
        "tracing" => Arc::new(TracingLogger::new()),
        "console" => {
            let level = match level {
                Some(level) => level.parse::<LogLevel>().ok()?,
                None => LogLevel::Debug,
            };
            Arc::new(ConsoleLogger::new(LogConfig::new().level(level)))
        }
        _ => return None,
    };

    Some(logger)
}

impl std::fmt::Debug for HmockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmockConfig")
            .field("responder", &self.responder.as_ref().map(|_| "<fn>"))
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Builder for `HmockConfig`.
#[derive(Default)]
pub struct HmockConfigBuilder {
    responder: Option<Responder>,
    logger: Option<Arc<dyn Logger>>,
}

impl HmockConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the responder from a closure or function.
    pub fn responder<F>(mut self, responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> HmockResult<HttpResponse> + Send + Sync + 'static,
    {
        self.responder = Some(responder_fn(responder));
        self
    }

    /// Sets an already shared responder.
    pub fn shared_responder(mut self, responder: Responder) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Sets the diagnostic sink.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> HmockConfig {
        HmockConfig {
            responder: self.responder,
            logger: self.logger,
        }
    }
}
