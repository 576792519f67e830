//! Upload policy: which files may be stored and where.
//!
//! The API layer streams multipart bytes; this module decides whether a file
//! is acceptable and what name it is stored under. Client-supplied file names
//! are never used on disk.

use crate::error::CoreError;

/// Category of uploaded file, which determines the allowed extensions and the
/// storage subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Applicant CVs.
    Resume,
    /// Blog cover images and other CMS assets.
    Image,
}

const RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

impl UploadKind {
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Resume => RESUME_EXTENSIONS,
            UploadKind::Image => IMAGE_EXTENSIONS,
        }
    }

    /// Subdirectory of the upload root for this kind.
    pub fn subdir(self) -> &'static str {
        match self {
            UploadKind::Resume => "resumes",
            UploadKind::Image => "images",
        }
    }
}

/// Extract the lowercase extension from a client-supplied file name.
pub fn extension_of(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check a file against the policy for `kind`, returning its normalized
/// extension.
pub fn validate_upload(
    kind: UploadKind,
    file_name: &str,
    size_bytes: usize,
    max_bytes: usize,
) -> Result<String, CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if size_bytes > max_bytes {
        return Err(CoreError::Validation(format!(
            "File too large: {size_bytes} bytes (max {max_bytes})"
        )));
    }

    let allowed = kind.allowed_extensions();
    match extension_of(file_name) {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(ext),
        _ => Err(CoreError::Validation(format!(
            "Unsupported file type for '{file_name}'. Allowed: {}",
            allowed.join(", ")
        ))),
    }
}

/// Relative storage path (`<subdir>/<uuid>.<ext>`) for a validated upload.
pub fn stored_path(kind: UploadKind, ext: &str) -> String {
    format!("{}/{}.{ext}", kind.subdir(), uuid::Uuid::new_v4())
}
