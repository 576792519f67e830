//! First-start super-admin bootstrap.

use jobboard_core::error::CoreError;
use jobboard_core::roles::ROLE_SUPER_ADMIN;
use jobboard_core::validation::validate_password_strength;
use jobboard_db::models::admin::{Admin, CreateAdmin};
use jobboard_db::repositories::AdminRepo;
use jobboard_db::DbPool;

use crate::auth::password::{hash_password, MIN_PASSWORD_LENGTH};
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Create the seed super-admin unless an admin with that email already
/// exists. Returns the created row, or `None` when nothing was done.
pub async fn seed_super_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<Option<Admin>> {
    if AdminRepo::find_by_email(pool, &seed.email).await?.is_some() {
        tracing::debug!(email = %seed.email, "Seed admin already exists");
        return Ok(None);
    }

    validate_password_strength(&seed.password, MIN_PASSWORD_LENGTH)?;
    if !seed.email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "ADMIN_SEED_EMAIL is not an email address".into(),
        )));
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            full_name: seed.full_name.clone(),
            email: seed.email.clone(),
            password_hash,
            role: ROLE_SUPER_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Seeded super admin");
    Ok(Some(admin))
}
