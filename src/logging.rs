use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise the level follows the
/// verbosity flags. Output goes to stderr so stdout stays clean for values.
pub fn init(verbose: bool, quiet: bool) {
    let fallback = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
