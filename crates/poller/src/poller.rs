//! Interval-driven poll loop.

use std::time::Duration;

use jobboard_core::types::DbId;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::cache::FeedCache;
use crate::source::{FeedSource, PollError};

/// Default seconds between polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default number of items kept in the cache.
pub const DEFAULT_MAX_ITEMS: usize = 200;

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
    pub max_items: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Polls a [`FeedSource`] and publishes newest-first snapshots of everything
/// seen so far. Subscribers are only woken when new ids arrive.
pub struct Poller<S: FeedSource> {
    source: S,
    cache: FeedCache<S::Item>,
    cursor: DbId,
    interval: Duration,
    tx: watch::Sender<Vec<S::Item>>,
}

impl<S: FeedSource> Poller<S> {
    pub fn new(source: S, config: PollerConfig) -> (Self, watch::Receiver<Vec<S::Item>>) {
        let (tx, rx) = watch::channel(Vec::new());
        let poller = Self {
            source,
            cache: FeedCache::new(config.max_items),
            cursor: 0,
            interval: config.interval,
            tx,
        };
        (poller, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<S::Item>> {
        self.tx.subscribe()
    }

    pub fn cursor(&self) -> DbId {
        self.cursor
    }

    /// Fetch once from the current cursor. Returns the number of new ids.
    pub async fn poll_once(&mut self) -> Result<usize, PollError> {
        let page = self.source.fetch(self.cursor).await?;
        let added = self.cache.merge(page.items);
        self.cursor = self.cursor.max(page.latest_id).max(self.cache.cursor());

        if added > 0 {
            self.tx.send_replace(self.cache.snapshot());
        }
        Ok(added)
    }

    /// Poll every interval until `cancel` fires. Fetch errors are logged and
    /// retried on the next tick. Cancellation also abandons an in-flight fetch.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(interval_secs = self.interval.as_secs(), "Poller started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                _ = cancel.cancelled() => break,
                result = self.poll_once() => result,
            };
            match result {
                Ok(0) => {}
                Ok(added) => {
                    tracing::debug!(added, cursor = self.cursor, "Feed updated");
                }
                Err(e) => {
                    tracing::warn!(error = %e, cursor = self.cursor, "Poll failed");
                }
            }
        }

        tracing::info!(cursor = self.cursor, "Poller stopping");
    }
}
