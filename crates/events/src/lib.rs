//! Job board event bus and outbound delivery.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`]: the event envelope published by request handlers.
//! - [`delivery`]: external delivery channels (email).

pub mod bus;
pub mod delivery;

pub use bus::{DomainEvent, EventBus};
pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
