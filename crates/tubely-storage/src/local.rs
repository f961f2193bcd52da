use crate::assets;
use crate::traits::{StorageError, StorageResult};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// The local assets root.
///
/// Thumbnails are written here for good. Videos are written here, probed,
/// promoted to the remote store and then truncated.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
    asset_host: String,
    port: u16,
}

impl LocalStorage {
    /// Create the assets root if missing and return a handle to it.
    ///
    /// # Arguments
    /// * `root` - Assets directory (e.g., "./assets")
    /// * `asset_host` - Host used in asset URLs (e.g., "localhost")
    /// * `port` - Port the API listens on, also used in asset URLs
    pub async fn new(
        root: impl Into<PathBuf>,
        asset_host: impl Into<String>,
        port: u16,
    ) -> StorageResult<Self> {
        let root = root.into();

        assets::ensure_assets_dir(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create assets directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            root,
            asset_host: asset_host.into(),
            port,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Disk path for a generated filename.
    ///
    /// The name must be a single plain path component. Dots inside it are fine,
    /// since extensions carry the client's subtype verbatim.
    pub fn disk_path(&self, filename: &str) -> StorageResult<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {
                Ok(assets::asset_disk_path(&self.root, filename))
            }
            _ => Err(StorageError::InvalidKey(filename.to_string())),
        }
    }

    /// URL under which `filename` is served.
    pub fn url(&self, filename: &str) -> String {
        assets::asset_url(&self.asset_host, self.port, filename)
    }

    /// Write `data` to `filename`, replacing any existing file.
    pub async fn write(&self, filename: &str, data: &[u8]) -> StorageResult<PathBuf> {
        let path = self.disk_path(filename)?;
        let start = std::time::Instant::now();

        fs::write(&path, data).await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Asset written"
        );

        Ok(path)
    }

    /// Cut `filename` down to zero bytes, keeping the file itself.
    pub async fn truncate(&self, filename: &str) -> StorageResult<()> {
        let path = self.disk_path(filename)?;
        let file = fs::OpenOptions::new().write(true).open(&path).await?;
        file.set_len(0).await?;
        Ok(())
    }

    /// Best-effort removal. Errors are logged, never returned.
    pub async fn remove(&self, filename: &str) {
        let path = match self.disk_path(filename) {
            Ok(path) => path,
            Err(_) => return,
        };
        match fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed orphaned asset"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                error = %e,
                path = %path.display(),
                "Failed to remove orphaned asset"
            ),
        }
    }
}
