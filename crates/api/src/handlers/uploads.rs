//! Multipart file uploads: applicant resumes and CMS images.
//!
//! Files are stored under `UPLOAD_DIR/<kind>/<uuid>.<ext>` and served back
//! from `/uploads`. The client file name only contributes its extension.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::upload::{stored_path, validate_upload, UploadKind};
use jobboard_db::models::user::UpdateProfile;
use jobboard_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Where an uploaded file was stored.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Path relative to the upload root, e.g. `resumes/<uuid>.pdf`.
    pub path: String,
    /// Public URL under `/uploads`.
    pub url: String,
}

/// Read the `file` field, enforce the policy for `kind` and write it to disk.
async fn store_upload(
    state: &AppState,
    kind: UploadKind,
    multipart: &mut Multipart,
) -> AppResult<UploadedFile> {
    let max_bytes = state.config.max_upload_bytes;
    let mut upload: Option<(String, Vec<u8>, usize)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let mut data = Vec::new();
        let mut size = 0usize;

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            size += chunk.len();
            if size > max_bytes {
                break;
            }
            data.extend_from_slice(&chunk);
        }
        upload = Some((file_name, data, size));
        break;
    }

    let (file_name, data, size) =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    let ext = validate_upload(kind, &file_name, size, max_bytes)?;

    let path = stored_path(kind, &ext);
    let target = state.config.upload_dir.join(&path);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
    }
    tokio::fs::write(&target, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(path = %path, size, "File uploaded");
    Ok(UploadedFile {
        url: format!("/uploads/{path}"),
        path,
    })
}

/// POST /api/uploads/resume
///
/// The stored path is also recorded as the caller's profile resume.
pub async fn upload_resume(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedFile>>)> {
    let file = store_upload(&state, UploadKind::Resume, &mut multipart).await?;

    UserRepo::update_profile(
        &state.pool,
        user.subject_id,
        &UpdateProfile {
            resume_path: Some(file.path.clone()),
            ..Default::default()
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: file })))
}

/// POST /api/admin/uploads/image
pub async fn upload_image(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedFile>>)> {
    let file = store_upload(&state, UploadKind::Image, &mut multipart).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: file })))
}
