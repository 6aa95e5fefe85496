//! Log subscriber setup for hosts that do not install their own.

use tracing_subscriber::filter::EnvFilter;

/// Install a stderr fmt subscriber filtered at `log_level`.
///
/// `log_level` is any `EnvFilter` directive (`"debug"`,
/// `"anime_lookup=trace,info"`); an unparsable value falls back to `info`.
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(log_level: &str) -> bool {
    let filter = log_level
        .parse::<EnvFilter>()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
