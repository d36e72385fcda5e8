//! Observability for hmock.
//!
//! Diagnostics are strictly optional: a transport with no logger emits
//! nothing and behaves identically otherwise.

mod logging;

pub use logging::{
    ConsoleLogger, Fields, LogConfig, LogLevel, LogRecord, Logger, MemoryLogger, TracingLogger,
};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global `tracing` subscriber printing to stdout.
///
/// `RUST_LOG` takes precedence over `level` when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(level: LogLevel) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(tracing::level_filters::LevelFilter::from(level).into())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_installs_once() {
        init_tracing(LogLevel::Debug);
        assert!(!init_tracing(LogLevel::Debug));
    }
}
