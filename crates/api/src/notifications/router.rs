//! Event-to-email routing.
//!
//! [`NotificationRouter`] consumes the event bus and, for admin-facing
//! events, sends a plain-text email to `ADMIN_NOTIFY_EMAIL`. Without SMTP or
//! a target address the events are logged and skipped.

use jobboard_events::bus::{
    EVENT_APPLICATION_SUBMITTED, EVENT_INQUIRY_CREATED, EVENT_VACANCY_SUBMITTED,
};
use jobboard_events::{DomainEvent, EmailDelivery};
use tokio::sync::broadcast;

pub struct NotificationRouter {
    email: Option<EmailDelivery>,
    admin_email: Option<String>,
}

impl NotificationRouter {
    pub fn new(email: Option<EmailDelivery>, admin_email: Option<String>) -> Self {
        Self { email, admin_email }
    }

    /// Run until the event bus is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.route_event(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    async fn route_event(&self, event: &DomainEvent) {
        let Some((summary, body)) = compose_admin_email(event) else {
            return;
        };

        let (Some(email), Some(to)) = (&self.email, &self.admin_email) else {
            tracing::debug!(
                event_type = %event.event_type,
                "Email delivery not configured, skipping"
            );
            return;
        };

        if let Err(e) = email.deliver(to, &summary, &body).await {
            tracing::error!(
                error = %e,
                event_type = %event.event_type,
                "Failed to send notification email"
            );
        }
    }
}

/// Subject summary and body for events that operations staff are emailed
/// about. Other events return `None`.
pub fn compose_admin_email(event: &DomainEvent) -> Option<(String, String)> {
    let field = |key: &str| event.payload_str(key).unwrap_or("-").to_string();

    let (summary, body) = match event.event_type.as_str() {
        EVENT_APPLICATION_SUBMITTED => (
            format!("New application for {}", field("job_title")),
            format!(
                "{} applied for {} at {}.",
                field("applicant_name"),
                field("job_title"),
                field("company")
            ),
        ),
        EVENT_INQUIRY_CREATED => (
            format!("New staffing inquiry from {}", field("company_name")),
            format!(
                "{} from {} is looking for staff.\nEmail: {}",
                field("contact_name"),
                field("company_name"),
                field("email")
            ),
        ),
        EVENT_VACANCY_SUBMITTED => (
            format!("New vacancy submitted: {}", field("title")),
            format!(
                "{} submitted a vacancy for {}.\nContact: {}",
                field("company_name"),
                field("title"),
                field("contact_email")
            ),
        ),
        _ => return None,
    };

    let body = format!("{body}\n\nReceived: {}", event.timestamp.to_rfc3339());
    Some((summary, body))
}
