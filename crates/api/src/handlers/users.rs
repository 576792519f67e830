//! Job seeker profile handlers and admin user management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::error::CoreError;
use jobboard_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use jobboard_core::roles::ROLE_USER;
use jobboard_core::types::DbId;
use jobboard_core::validation::{validate_password_strength, validate_text, MAX_SHORT_TEXT_LEN};
use jobboard_db::models::user::{UpdateProfile, UserResponse};
use jobboard_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;

use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{not_found, AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct UserListParams {
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Self-service
// ---------------------------------------------------------------------------

/// GET /api/users/me
pub async fn get_me(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let row = UserRepo::find_by_id(&state.pool, user.subject_id)
        .await?
        .ok_or_else(|| not_found("User", user.subject_id))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&row),
    }))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    if let Some(name) = &input.full_name {
        validate_text("full_name", name, MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(headline) = &input.headline {
        validate_text("headline", headline, MAX_SHORT_TEXT_LEN)?;
    }

    let row = UserRepo::update_profile(&state.pool, user.subject_id, &input)
        .await?
        .ok_or_else(|| not_found("User", user.subject_id))?;
    tracing::info!(user_id = row.id, "Profile updated");

    Ok(Json(DataResponse {
        data: UserResponse::from(&row),
    }))
}

/// PUT /api/users/me/password
///
/// Requires the current password. Every refresh session is revoked.
pub async fn change_password(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let row = UserRepo::find_by_id(&state.pool, user.subject_id)
        .await?
        .ok_or_else(|| not_found("User", user.subject_id))?;

    let valid = verify_password(&input.current_password, &row.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)?;
    let hashed = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update_password(&state.pool, row.id, &hashed).await?;
    SessionRepo::revoke_all_for_subject(&state.pool, ROLE_USER, row.id).await?;
    tracing::info!(user_id = row.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<UserListParams>,
) -> AppResult<Json<PageResponse<UserResponse>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let search = params.q.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let users = UserRepo::list(&state.pool, search, limit, offset).await?;
    let total = UserRepo::count(&state.pool, search).await?;
    tracing::debug!(count = users.len(), total, "Listed users");

    Ok(Json(PageResponse {
        data: users.iter().map(UserResponse::from).collect(),
        total,
    }))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("User", id))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}

/// DELETE /api/admin/users/{id}
///
/// Soft-deactivates the account and revokes its sessions.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found("User", id));
    }
    UserRepo::deactivate(&state.pool, id).await?;
    SessionRepo::revoke_all_for_subject(&state.pool, ROLE_USER, id).await?;
    tracing::info!(user_id = id, admin_id = admin.subject_id, "User deactivated");
    Ok(StatusCode::NO_CONTENT)
}
