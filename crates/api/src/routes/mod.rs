pub mod applications;
pub mod auth;
pub mod blogs;
pub mod health;
pub mod inquiries;
pub mod jobs;
pub mod notifications;
pub mod stats;
pub mod super_admin;
pub mod testimonials;
pub mod uploads;
pub mod users;
pub mod vacancies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                             register (public)
/// /auth/login                                user login (public)
/// /auth/refresh                              refresh (public)
/// /auth/logout                               logout (requires auth)
/// /auth/me                                   caller profile
/// /admin/auth/login                          admin login (public)
///
/// /users/me                                  get, update own profile (user)
/// /users/me/password                         change password (user)
///
/// /jobs                                      search published jobs
/// /jobs/{id}                                 published job
/// /jobs/{id}/apply                           apply (user)
/// /applications/mine                         own applications (user)
/// /applications/{id}                         withdraw (user)
///
/// /blogs                                     published posts
/// /blogs/{slug}                              post by slug
/// /testimonials                              approved list, submit
/// /inquiries                                 contact form (public)
/// /vacancies                                 vacancy submission (public)
///
/// /notifications                             list own
/// /notifications/unread-count                unread count
/// /notifications/read-all                    mark all read
/// /notifications/{id}/read                   mark one read
///
/// /realtime/notifications                    id-cursor poll
/// /realtime/jobs                             updated-since poll (public)
/// /realtime/applications                     updated-since poll
///
/// /uploads/resume                            resume upload (user)
///
/// /admin/users                               list
/// /admin/users/{id}                          get, deactivate
/// /admin/jobs                                list, create
/// /admin/jobs/{id}                           get, update, delete
/// /admin/applications                        list
/// /admin/applications/{id}                   detail
/// /admin/applications/{id}/status            set status
/// /admin/blogs                               list, create
/// /admin/blogs/{id}                          get, update, delete
/// /admin/testimonials                        list, create
/// /admin/testimonials/{id}                   update, delete
/// /admin/inquiries                           list
/// /admin/inquiries/{id}                      get, update, delete
/// /admin/vacancies                           list
/// /admin/vacancies/{id}                      get, delete
/// /admin/vacancies/{id}/status               approve / reject
/// /admin/vacancies/{id}/publish              create job from vacancy
/// /admin/uploads/image                       image upload
/// /admin/stats                               dashboard totals
///
/// /super-admin/admins                        list, create (super_admin)
/// /super-admin/admins/{id}                   update, deactivate
/// /super-admin/admins/{id}/reset-password    reset password
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication.
        .nest("/auth", auth::router())
        .nest("/admin/auth", auth::admin_router())
        // Job seeker self-service.
        .nest("/users", users::router())
        .nest("/applications", applications::router())
        .nest("/uploads", uploads::router())
        // Public site.
        .nest("/jobs", jobs::router())
        .nest("/blogs", blogs::router())
        .nest("/testimonials", testimonials::router())
        .nest("/inquiries", inquiries::router())
        .nest("/vacancies", vacancies::router())
        // Notifications and polling (users and admins).
        .nest("/notifications", notifications::router())
        .nest("/realtime", notifications::realtime_router())
        // Admin console.
        .nest("/admin/users", users::admin_router())
        .nest("/admin/jobs", jobs::admin_router())
        .nest("/admin/applications", applications::admin_router())
        .nest("/admin/blogs", blogs::admin_router())
        .nest("/admin/testimonials", testimonials::admin_router())
        .nest("/admin/inquiries", inquiries::admin_router())
        .nest("/admin/vacancies", vacancies::admin_router())
        .nest("/admin/uploads", uploads::admin_router())
        .nest("/admin/stats", stats::router())
        // Staff management.
        .nest("/super-admin", super_admin::router())
}
