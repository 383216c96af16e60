use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const DEBUG_FILTER: &str = "info,kobo_verify=debug";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` is honoured unless `debug` forces this crate to debug level.
pub(crate) fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    // A second install (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
