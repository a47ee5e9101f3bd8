use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "binsplit_core=info,binsplit_cli=info";

/// Install the global `tracing` subscriber. Logs go to stderr; `RUST_LOG` overrides
/// the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
