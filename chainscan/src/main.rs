use std::time::Duration;

use chainscan::{config::Config, report, rpc::BitcoindClient};
use chainwork::StopCondition;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_args()?;

    // Setup tracing with optional file output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt().with_env_filter(env_filter);

    if let Some(log_file) = &config.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| format!("Failed to open log file {}: {}", log_file, e))?;
        fmt_layer.with_writer(std::sync::Arc::new(file)).init();
    } else {
        fmt_layer.init();
    }

    info!("Starting chainscan");

    let client = BitcoindClient::new(
        &config.node_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!("Node endpoint: {}", client.endpoint());
    match config.stop {
        StopCondition::ChainTip => info!("Scanning the whole chain"),
        StopCondition::Samples(n) => info!("Scanning until {} period samples are collected", n),
        StopCondition::Days(d) => info!("Scanning the first {} days of the chain", d),
    }

    let samples = match chainwork::estimate(&client, config.stop).await {
        Ok(samples) => samples,
        Err(e) => {
            // Abort without emitting partial or corrupted JSON
            error!("Scan aborted: {}", e);
            return Err(e.to_string().into());
        }
    };
    info!("Computed {} hash rate samples", samples.len());

    report::write_report(&samples, config.output.as_deref())?;

    Ok(())
}
