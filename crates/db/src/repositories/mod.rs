//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod application_repo;
pub mod blog_post_repo;
pub mod inquiry_repo;
pub mod job_repo;
pub mod notification_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod testimonial_repo;
pub mod user_repo;
pub mod vacancy_repo;

pub use admin_repo::AdminRepo;
pub use application_repo::ApplicationRepo;
pub use blog_post_repo::BlogPostRepo;
pub use inquiry_repo::InquiryRepo;
pub use job_repo::JobRepo;
pub use notification_repo::NotificationRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
pub use vacancy_repo::VacancyRepo;
