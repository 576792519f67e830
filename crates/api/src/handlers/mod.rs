pub mod applications;
pub mod auth;
pub mod blogs;
pub mod inquiries;
pub mod jobs;
pub mod notifications;
pub mod realtime;
pub mod stats;
pub mod super_admin;
pub mod testimonials;
pub mod uploads;
pub mod users;
pub mod vacancies;
