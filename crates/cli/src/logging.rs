use adorn_core::constants::ADORN_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system.
///
/// Reads the filter from `ADORN_LOG` and defaults to `warn`: the demo
/// transcripts on stdout are the program's output contract, and library
/// diagnostics stay on stderr behind the filter.
pub fn init() -> eyre::Result<()> {
    let filter =
        EnvFilter::try_from_env(ADORN_LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
