use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobboard_poller::poller::DEFAULT_POLL_INTERVAL_SECS;
use jobboard_poller::{HttpNotificationSource, Poller, PollerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobboard_poller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("JOBBOARD_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".into());
    let token = std::env::var("JOBBOARD_TOKEN").context("JOBBOARD_TOKEN must be set")?;
    let interval_secs: u64 = match std::env::var("POLL_INTERVAL_SECS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("POLL_INTERVAL_SECS must be a number, got {raw:?}"))?,
        Err(_) => DEFAULT_POLL_INTERVAL_SECS,
    };

    let config = PollerConfig {
        interval: Duration::from_secs(interval_secs.max(1)),
        ..Default::default()
    };
    tracing::info!(api_url = %api_url, interval_secs, "Polling notifications");

    let source = HttpNotificationSource::new(api_url, token).context("building HTTP client")?;
    let (poller, mut rx) = Poller::new(source, config);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(poller.run(cancel.clone()));

    let mut last_logged = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, stopping");
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                for notification in snapshot.iter().rev().filter(|n| n.id > last_logged) {
                    tracing::info!(
                        id = notification.id,
                        kind = %notification.kind,
                        created_at = %notification.created_at,
                        "{}: {}",
                        notification.title,
                        notification.message,
                    );
                }
                last_logged = snapshot.first().map_or(last_logged, |n| n.id);
            }
        }
    }

    cancel.cancel();
    handle.await.context("poller task panicked")?;
    Ok(())
}
