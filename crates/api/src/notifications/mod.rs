//! Notification infrastructure.
//!
//! - [`dispatch`] writes in-app notifications for users and admins.
//! - [`NotificationRouter`] subscribes to the event bus and emails
//!   admin-facing events to the configured operations mailbox.

pub mod dispatch;
pub mod router;

pub use router::NotificationRouter;
