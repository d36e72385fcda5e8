//! hmock
//!
//! A substitutable HTTP transport for tests and sandboxes. Every request
//! issued through the client is resolved by a user-supplied responder
//! instead of the network.
//!
//! # Features
//!
//! - **Responder-driven**: one function maps each request to a response or an error
//! - **Sensible default**: with no responder, every request gets an empty `200 OK`
//! - **Transparent failures**: responder errors reach the caller unchanged
//! - **Optional diagnostics**: plug in a `tracing`, console or in-memory logger
//! - **Interop**: responses convert into `http::Response` and `reqwest::Response`
//!
//! # Quick Start
//!
//! ```rust
//! use hmock::Hmock;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mock = Hmock::default();
//!     let response = mock.client().get("http://example.com").await?;
//!
//!     assert_eq!(response.status, 200);
//!     assert!(response.body.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod errors;
pub mod facade;
pub mod observability;
pub mod responder;
pub mod transport;

// Re-exports for convenience
pub use client::HttpClient;
pub use config::{HmockConfig, HmockConfigBuilder};
pub use errors::{HmockError, HmockResult};
pub use facade::Hmock;
pub use observability::{ConsoleLogger, LogLevel, Logger, MemoryLogger, TracingLogger};
pub use responder::{default_responder, responder_fn, Responder};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, MockTransport, Transport};
