//! Handlers for the `/auth` resource (register, login, refresh, logout, me)
//! and the separate admin login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use jobboard_core::error::CoreError;
use jobboard_core::roles::{principal_kind, ROLE_ADMIN, ROLE_USER};
use jobboard_core::types::{DbId, Timestamp};
use jobboard_core::validation::{validate_password_strength, validate_text, MAX_SHORT_TEXT_LEN};
use jobboard_db::models::admin::AdminResponse;
use jobboard_db::models::session::CreateSession;
use jobboard_db::models::user::{CreateUser, UserResponse};
use jobboard_db::repositories::{AdminRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{not_found, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by register, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub principal: PrincipalInfo,
}

#[derive(Debug, Serialize)]
pub struct PrincipalInfo {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

/// Profile of the caller: a job seeker or a staff account.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MeResponse {
    User(UserResponse),
    Admin(AdminResponse),
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a job seeker account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    input.validate()?;
    validate_text("full_name", &input.full_name, MAX_SHORT_TEXT_LEN)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: input.full_name.trim().to_string(),
            email: input.email.trim().to_string(),
            password_hash,
            phone: input.phone,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let response = create_auth_response(
        &state,
        PrincipalInfo {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// POST /api/auth/login
///
/// Job seeker login with email + password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    ensure_can_login(user.is_active, user.locked_until)?;

    if !check_password(&input.password, &user.password_hash)? {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if let Some(until) = lock_deadline(user.failed_login_count) {
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "User account locked after failed logins");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let response = create_auth_response(
        &state,
        PrincipalInfo {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    Ok(Json(DataResponse { data: response }))
}

/// POST /api/admin/auth/login
///
/// Staff login. Tokens carry the admin's role (`admin` or `super_admin`).
pub async fn admin_login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let admin = AdminRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    ensure_can_login(admin.is_active, admin.locked_until)?;

    if !check_password(&input.password, &admin.password_hash)? {
        AdminRepo::increment_failed_login(&state.pool, admin.id).await?;
        if let Some(until) = lock_deadline(admin.failed_login_count) {
            AdminRepo::lock_account(&state.pool, admin.id, until).await?;
            tracing::warn!(admin_id = admin.id, "Admin account locked after failed logins");
        }
        return Err(invalid_credentials());
    }

    AdminRepo::record_successful_login(&state.pool, admin.id).await?;

    let response = create_auth_response(
        &state,
        PrincipalInfo {
            id: admin.id,
            full_name: admin.full_name,
            email: admin.email,
            role: admin.role,
        },
    )
    .await?;

    Ok(Json(DataResponse { data: response }))
}

/// POST /api/auth/refresh
///
/// Exchange a refresh token for a new token pair. The old session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let principal = if session.subject_role == ROLE_ADMIN {
        let admin = AdminRepo::find_by_id(&state.pool, session.subject_id)
            .await?
            .ok_or_else(account_gone)?;
        ensure_active(admin.is_active)?;
        PrincipalInfo {
            id: admin.id,
            full_name: admin.full_name,
            email: admin.email,
            role: admin.role,
        }
    } else {
        let user = UserRepo::find_by_id(&state.pool, session.subject_id)
            .await?
            .ok_or_else(account_gone)?;
        ensure_active(user.is_active)?;
        PrincipalInfo {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: ROLE_USER.to_string(),
        }
    };

    let response = create_auth_response(&state, principal).await?;
    Ok(Json(DataResponse { data: response }))
}

/// POST /api/auth/logout
///
/// Revoke every session of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<StatusCode> {
    let revoked =
        SessionRepo::revoke_all_for_subject(&state.pool, auth.principal_kind(), auth.subject_id)
            .await?;
    tracing::info!(subject_id = auth.subject_id, role = %auth.role, revoked, "Logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<MeResponse>>> {
    let data = if auth.is_admin() {
        let admin = AdminRepo::find_by_id(&state.pool, auth.subject_id)
            .await?
            .ok_or_else(|| not_found("Admin", auth.subject_id))?;
        MeResponse::Admin(AdminResponse::from(&admin))
    } else {
        let user = UserRepo::find_by_id(&state.pool, auth.subject_id)
            .await?
            .ok_or_else(|| not_found("User", auth.subject_id))?;
        MeResponse::User(UserResponse::from(&user))
    };
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

fn account_gone() -> AppError {
    AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
}

fn ensure_active(is_active: bool) -> AppResult<()> {
    if !is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    Ok(())
}

fn ensure_can_login(is_active: bool, locked_until: Option<Timestamp>) -> AppResult<()> {
    ensure_active(is_active)?;
    if locked_until.is_some_and(|until| until > Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }
    Ok(())
}

fn check_password(password: &str, hash: &str) -> AppResult<bool> {
    verify_password(password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))
}

/// Lock expiry to apply after a failed attempt, given the count before it.
fn lock_deadline(failed_before: i32) -> Option<Timestamp> {
    (failed_before + 1 >= MAX_FAILED_ATTEMPTS)
        .then(|| Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS))
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    principal: PrincipalInfo,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(principal.id, &principal.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            subject_role: principal_kind(&principal.role).to_string(),
            subject_id: principal.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_applies_on_fifth_failure() {
        assert!(lock_deadline(0).is_none());
        assert!(lock_deadline(3).is_none());
        assert!(lock_deadline(4).is_some());
    }

    #[test]
    fn expired_lock_does_not_block_login() {
        let past = Utc::now() - chrono::Duration::minutes(1);
        assert!(ensure_can_login(true, Some(past)).is_ok());
        let future = Utc::now() + chrono::Duration::minutes(1);
        assert!(ensure_can_login(true, Some(future)).is_err());
        assert!(ensure_can_login(false, None).is_err());
    }
}
