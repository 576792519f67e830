//! Testimonial model and DTOs.

use jobboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: i16,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a testimonial.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub rating: Option<i16>,
}

/// DTO for patching a testimonial (admin only).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i16>,
    pub is_approved: Option<bool>,
}
