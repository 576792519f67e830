//! Client for the job board's realtime polling endpoints.
//!
//! A [`Poller`] repeatedly asks a [`FeedSource`] for items newer than its
//! cursor, folds them into a [`FeedCache`] and publishes the merged snapshot
//! on a `tokio::sync::watch` channel.

pub mod cache;
pub mod poller;
pub mod source;

pub use cache::FeedCache;
pub use poller::{Poller, PollerConfig};
pub use source::{FeedItem, FeedSource, HttpNotificationSource, Page, PollError, RemoteNotification};
