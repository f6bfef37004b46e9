//! Test harness utilities.

use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test writer.
///
/// Safe to call from several tests; only the first call installs a
/// subscriber.
///
/// # Example
///
/// ```rust,ignore
/// use tidings_test::setup_test_logging;
///
/// #[test]
/// fn my_test() {
///     setup_test_logging("tidings_events=trace");
///     // ... test code
/// }
/// ```
pub fn setup_test_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}

/// Set up test logging with default filter (warn level).
pub fn setup_test_logging_default() {
    setup_test_logging("warn");
}
