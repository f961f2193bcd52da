//! Configuration module
//!
//! Process configuration is read once from the environment (after loading `.env`
//! if present), validated, and then passed to every component that needs it.

use std::env;
use std::path::PathBuf;

use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ASSETS_ROOT: &str = "./assets";
const DEFAULT_ASSET_HOST: &str = "localhost";
const DEFAULT_S3_PUBLIC_HOST: &str = "s3.amazonaws.com";
const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Directory holding locally served assets.
    pub assets_root: PathBuf,
    /// Host placed in local asset URLs.
    pub asset_host: String,
    pub storage_backend: StorageBackend,
    pub s3_bucket: String,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO etc.)
    pub s3_endpoint: Option<String>,
    /// Host suffix used when building public object URLs.
    pub s3_public_host: String,
    pub ffprobe_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse::<StorageBackend>()?,
            Err(_) => StorageBackend::S3,
        };

        Ok(Config {
            environment,
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            assets_root: PathBuf::from(
                env::var("ASSETS_ROOT").unwrap_or_else(|_| DEFAULT_ASSETS_ROOT.to_string()),
            ),
            asset_host: env::var("ASSET_HOST").unwrap_or_else(|_| DEFAULT_ASSET_HOST.to_string()),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").unwrap_or_default(),
            s3_region: env::var("S3_REGION").or_else(|_| env::var("AWS_REGION")).ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            s3_public_host: env::var("S3_PUBLIC_HOST")
                .unwrap_or_else(|_| DEFAULT_S3_PUBLIC_HOST.to_string()),
            ffprobe_path: env::var("FFPROBE_PATH")
                .unwrap_or_else(|_| DEFAULT_FFPROBE_PATH.to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }

        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.s3_bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET must be set"));
        }

        if self.storage_backend == StorageBackend::S3 && self.s3_region.is_none() {
            return Err(anyhow::anyhow!(
                "S3_REGION or AWS_REGION must be set when using S3 storage backend"
            ));
        }

        // The probe binary is spawned directly, never through a shell.
        if self.ffprobe_path.is_empty()
            || self
                .ffprobe_path
                .chars()
                .any(|c| matches!(c, ';' | '|' | '&' | '$' | '`' | '\n' | '<' | '>'))
        {
            return Err(anyhow::anyhow!(
                "FFPROBE_PATH must be a plain executable path"
            ));
        }

        Ok(())
    }
}
