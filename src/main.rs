mod config;
mod crawler;
mod notifier;
mod storage;
mod watcher;

use config::Config;
use watcher::{RunOutcome, WatchService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    let service = WatchService::new(cfg);

    match service.run().await? {
        RunOutcome::Baseline => println!("init: saved baseline"),
        RunOutcome::Notified => println!("notified and saved state"),
        RunOutcome::NoChanges => println!("no changes"),
    }

    Ok(())
}
