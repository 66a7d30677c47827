use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (e.g., `debug`, `gocopy_codegen_go=trace`).
pub(crate) const LOG_ENV: &str = "PROTOC_GEN_GO_COPY_LOG";

/// Install the global subscriber; logs go to stderr, stdout carries the response.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
