use std::io::Read;

use contact_card_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

mod convert;

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!(error = %e, "Log bridge already installed");
    }

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    tracing::debug!(input_len = input.len(), "Read card from stdin");

    let output = convert::run(&input, &config)?;
    print!("{output}");

    Ok(())
}
