mod config;
mod models;
mod sources;
mod services;
mod ui;

use std::sync::Arc;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tokio::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use services::fetch::{self, FetchSlot};
use sources::{gecko::TrendingPools, llama::TvlHistory, JsonFeed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let watch = args.contains(&"--watch".to_string()) || args.contains(&"-w".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chain_pulse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::debug!("✓ Configuration loaded");

    let interval = args
        .iter()
        .position(|a| a == "--interval" || a == "-i")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(config.watch.interval);

    let tvl_feed = Arc::new(TvlHistory::new(&config.endpoints.tvl_history));
    let pools_feed = Arc::new(TrendingPools::new(&config.endpoints.trending_pools));

    // Each pipeline owns its slot; nothing is shared across the two.
    let tvl_slot: Arc<FetchSlot<Value>> = Arc::new(FetchSlot::new());
    let pools_slot: Arc<FetchSlot<Value>> = Arc::new(FetchSlot::new());

    loop {
        let start = std::time::Instant::now();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message(format!(
            "fetching {} + {}...",
            tvl_feed.name(),
            pools_feed.name()
        ));
        spinner.enable_steady_tick(Duration::from_millis(120));

        // Two independent feeds, fetched concurrently. Neither completion
        // order nor one side's failure affects the other.
        tokio::join!(
            fetch::refresh(&tvl_slot, tvl_feed.as_ref(), |v| v),
            fetch::refresh(&pools_slot, pools_feed.as_ref(), |v| v),
        );

        spinner.finish_and_clear();

        if watch {
            print!("\x1b[2J\x1b[H");
            println!(
                "  chain-pulse  {}  (refresh every {}s, ctrl-c to quit)",
                chrono::Local::now().format("%H:%M:%S"),
                interval
            );
        }
        ui::render(&tvl_slot.state(), &pools_slot.state(), &config.display);

        if !watch {
            break;
        }

        let elapsed = start.elapsed();
        let sleep_time = Duration::from_secs(interval).saturating_sub(elapsed);
        if sleep_time > Duration::ZERO {
            tokio::time::sleep(sleep_time).await;
        }
    }

    Ok(())
}
