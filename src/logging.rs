use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

// Library code only emits events through `tracing::{debug, info, warn}`;
// installing a subscriber is left to the binary.
//
// Events go to stderr so they never interleave with the prompts on stdout.
// `RUST_LOG` wins when set; otherwise `verbose` picks `info` over `warn`.
pub fn install_logger(verbose: bool) -> Result<(), SetGlobalDefaultError> {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
