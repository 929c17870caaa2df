//! Diagnostic logging for the hook binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `elide_hooks=debug`).
pub const ENV_LOG: &str = "ELIDE_HOOKS_LOG";

/// Install a stderr subscriber.
///
/// Stdout belongs to the host protocol, so diagnostics never go there. The
/// filter defaults to `warn`; a second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
