use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default upload size cap: 5 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const DEFAULT_ADMIN_SEED_NAME: &str = "Super Admin";

/// Credentials for the super-admin created on first start.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl AdminSeed {
    /// Returns `None` unless both `ADMIN_SEED_EMAIL` and `ADMIN_SEED_PASSWORD` are set.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("ADMIN_SEED_EMAIL").ok()?;
        let password = std::env::var("ADMIN_SEED_PASSWORD").ok()?;
        let full_name = std::env::var("ADMIN_SEED_NAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_SEED_NAME.to_string());
        Some(Self {
            email,
            password,
            full_name,
        })
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for uploaded files, also served under `/uploads`.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Where admin-facing event emails go. Email is skipped when unset.
    pub admin_notify_email: Option<String>,
    pub jwt: JwtConfig,
    pub admin_seed: Option<AdminSeed>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `./uploads`                |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                  |
    /// | `ADMIN_NOTIFY_EMAIL`   | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".into()),
        );

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let admin_notify_email = std::env::var("ADMIN_NOTIFY_EMAIL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            max_upload_bytes,
            admin_notify_email,
            jwt: JwtConfig::from_env(),
            admin_seed: AdminSeed::from_env(),
        }
    }
}
