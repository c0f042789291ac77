use crate::errors::LogError;

#[cfg(all(target_arch = "wasm32", feature = "dev-logging"))]
/// Setup the logging system for the application for WASM.
/// This function will install the [`tracing-web`] logging system
/// and route panics to the browser console.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(tracing_web::MakeConsoleWriter)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;

    Ok(())
}

#[cfg(all(target_arch = "wasm32", not(feature = "dev-logging")))]
/// Release builds only keep the panic hook; tracing events are dropped.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for native builds (tests, tooling).
/// This installs [`color_eyre`] and a [`tracing_subscriber`] fmt subscriber.
/// `RUST_LIB_BACKTRACE` defaults to `1` and `RUST_LOG` to `info,atlas=debug`
/// when they are not already set.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(|e| LogError::ErrorReporter(e.to_string()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atlas=debug,atlas_frontend=debug"));
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    // Installs process-wide hooks; run alone with `cargo test -- --ignored`.
    #[test]
    #[ignore]
    fn test_setup_installs_once() {
        setup().expect("first setup succeeds");
        assert!(setup().is_err());
    }
}
