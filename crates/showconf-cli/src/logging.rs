use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logs always go to stderr so stdout stays clean for the JSON document.
pub fn init_logging(verbose_level: u8, quiet: bool) -> Result<()> {
    // Determine log level from verbose count
    // 0 = info, 1 = debug (with hyper noise suppressed), 2+ = trace
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose_level > 0 {
        let filter_str = match verbose_level {
            1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stderr().is_terminal());

    let registry = Registry::default().with(filter);

    if json {
        registry.with(fmt::layer().json().with_writer(io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }

    Ok(())
}
