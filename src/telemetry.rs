//! Log output for the receipt server.

use tracing_subscriber::EnvFilter;

/// Installs a JSON-lines subscriber on stdout.
///
/// `RUST_LOG` selects what is emitted (`info` when unset). Each line carries
/// the enclosing service span, so a receipt's accept and score events can be
/// correlated by `id`. A second call leaves the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
