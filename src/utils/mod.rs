pub mod build_info;

use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

/// Installs the global tracing subscriber with sensible defaults. Callers
/// should go through `tally::init`, which guards this with a `Once`.
pub fn init_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(
        "tally=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
