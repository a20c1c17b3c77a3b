use std::sync::Once;

use anyhow::Context;
use diwan_config::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt, registry};

/// Default filter directives applied when `RUST_LOG` is not set.
const DEFAULT_LOG_DIRECTIVES: &str = "info";

// Test binaries initialize tracing from every test function, so the
// installation must be guarded against repeat calls.
static INIT_TEST_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber for a service binary.
///
/// Log records emitted through the `log` facade by dependencies are bridged
/// into tracing. Output goes to stdout through a non-blocking writer; the
/// returned guard flushes it and must stay alive for the lifetime of the
/// process. Development environments get human-readable lines, production
/// gets JSON.
pub fn init_tracing(service_name: &str) -> anyhow::Result<WorkerGuard> {
    LogTracer::init().context("failed to install the log-to-tracing bridge")?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let environment = Environment::load().context("failed to determine runtime environment")?;
    match environment {
        Environment::Dev => {
            let subscriber = registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(writer).with_target(false));
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to install the tracing subscriber")?;
        }
        Environment::Prod => {
            let subscriber = registry().with(env_filter).with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(writer),
            );
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to install the tracing subscriber")?;
        }
    }

    tracing::info!(
        service = service_name,
        environment = %environment,
        "tracing initialized"
    );

    Ok(guard)
}

/// Initializes tracing for test binaries.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Output is captured by the test harness.
pub fn init_test_tracing() {
    INIT_TEST_TRACING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

        let subscriber = registry()
            .with(env_filter)
            .with(fmt::layer().with_test_writer());

        // Another harness may have installed a subscriber already; tests do
        // not care which one wins.
        let _ = LogTracer::init();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
