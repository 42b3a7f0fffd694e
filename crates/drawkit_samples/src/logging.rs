//! Subscriber setup for the generator binaries.

use tracing_subscriber::EnvFilter;

const TUP_LOG_TARGETS: [&str; 2] = ["drawkit_samples", "drawkit_io_xlsx"];

/// Level name for a `-v` count.
pub fn derive_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the fmt subscriber on stderr.
///
/// `RUST_LOG` is honored; the `-v` count sets the level of this workspace's
/// crates on top of it. A second call is a no-op.
pub fn init_tracing(verbose: u8) {
    let c_level = derive_log_level(verbose);
    let filter = TUP_LOG_TARGETS
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, c_target| {
            match format!("{c_target}={c_level}").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
