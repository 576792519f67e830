//! Super-admin management of staff accounts.
//!
//! All endpoints require the `super_admin` role. A super admin cannot demote,
//! deactivate or delete themselves, and the last active super admin is never
//! removed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::error::CoreError;
use jobboard_core::roles::{validate_admin_role, ROLE_ADMIN, ROLE_SUPER_ADMIN};
use jobboard_core::types::DbId;
use jobboard_core::validation::{validate_password_strength, validate_text, MAX_SHORT_TEXT_LEN};
use jobboard_db::models::admin::{Admin, AdminResponse, CreateAdmin, UpdateAdmin};
use jobboard_db::repositories::{AdminRepo, SessionRepo};
use jobboard_db::DbPool;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::error::{not_found, AppError, AppResult};
use crate::middleware::rbac::RequireSuperAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminRequest {
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// Defaults to `admin`.
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

fn hash_or_internal(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Reject changes that would leave no active super admin.
async fn ensure_other_super_admin(pool: &DbPool, target: &Admin) -> AppResult<()> {
    if target.role == ROLE_SUPER_ADMIN
        && target.is_active
        && AdminRepo::count_active_by_role(pool, ROLE_SUPER_ADMIN).await? <= 1
    {
        return Err(
            CoreError::Conflict("At least one active super admin is required".into()).into(),
        );
    }
    Ok(())
}

/// GET /api/super-admin/admins
pub async fn list_admins(
    State(state): State<AppState>,
    RequireSuperAdmin(_caller): RequireSuperAdmin,
) -> AppResult<Json<DataResponse<Vec<AdminResponse>>>> {
    let admins = AdminRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: admins.iter().map(AdminResponse::from).collect(),
    }))
}

/// POST /api/super-admin/admins
pub async fn create_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Json(input): Json<CreateAdminRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AdminResponse>>)> {
    input.validate()?;
    validate_text("full_name", &input.full_name, MAX_SHORT_TEXT_LEN)?;
    let role = input.role.unwrap_or_else(|| ROLE_ADMIN.to_string());
    validate_admin_role(&role)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            full_name: input.full_name.trim().to_string(),
            email: input.email,
            password_hash: hash_or_internal(&input.password)?,
            role,
        },
    )
    .await?;
    tracing::info!(
        admin_id = admin.id,
        role = %admin.role,
        created_by = caller.subject_id,
        "Admin created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AdminResponse::from(&admin),
        }),
    ))
}

/// PUT /api/super-admin/admins/{id}
pub async fn update_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdmin>,
) -> AppResult<Json<DataResponse<AdminResponse>>> {
    if let Some(name) = &input.full_name {
        validate_text("full_name", name, MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(role) = &input.role {
        validate_admin_role(role)?;
    }

    let demotes = input.role.as_deref().is_some_and(|r| r != ROLE_SUPER_ADMIN);
    let deactivates = input.is_active == Some(false);

    if id == caller.subject_id && (demotes || deactivates) {
        return Err(
            CoreError::Conflict("You cannot demote or deactivate your own account".into()).into(),
        );
    }

    let target = AdminRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Admin", id))?;
    if demotes || deactivates {
        ensure_other_super_admin(&state.pool, &target).await?;
    }

    let admin = AdminRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Admin", id))?;
    if deactivates {
        SessionRepo::revoke_all_for_subject(&state.pool, ROLE_ADMIN, id).await?;
    }
    tracing::info!(admin_id = id, updated_by = caller.subject_id, "Admin updated");

    Ok(Json(DataResponse {
        data: AdminResponse::from(&admin),
    }))
}

/// DELETE /api/super-admin/admins/{id}
///
/// Soft-deactivates the account and revokes its sessions.
pub async fn delete_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == caller.subject_id {
        return Err(CoreError::Conflict("You cannot delete your own account".into()).into());
    }
    let target = AdminRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Admin", id))?;
    ensure_other_super_admin(&state.pool, &target).await?;

    AdminRepo::deactivate(&state.pool, id).await?;
    SessionRepo::revoke_all_for_subject(&state.pool, ROLE_ADMIN, id).await?;
    tracing::info!(admin_id = id, deleted_by = caller.subject_id, "Admin deactivated");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/super-admin/admins/{id}/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    RequireSuperAdmin(caller): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password, MIN_PASSWORD_LENGTH)?;
    let hashed = hash_or_internal(&input.new_password)?;

    if !AdminRepo::update_password(&state.pool, id, &hashed).await? {
        return Err(not_found("Admin", id));
    }
    SessionRepo::revoke_all_for_subject(&state.pool, ROLE_ADMIN, id).await?;
    tracing::info!(admin_id = id, reset_by = caller.subject_id, "Admin password reset");

    Ok(StatusCode::NO_CONTENT)
}
