use crate::{ObjectStorage, Storage, StorageBackend, StorageError, StorageResult};
use std::sync::Arc;
use tubely_core::Config;

/// Create the remote object store based on configuration
pub fn create_remote_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    if config.s3_bucket.trim().is_empty() {
        return Err(StorageError::ConfigError(
            "S3_BUCKET not configured".to_string(),
        ));
    }

    match config.storage_backend {
        StorageBackend::S3 => {
            let region = config.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let storage = ObjectStorage::s3(
                config.s3_bucket.clone(),
                region,
                config.s3_endpoint.clone(),
                config.s3_public_host.clone(),
            )?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory remote storage; uploaded videos are not persisted");
            Ok(Arc::new(ObjectStorage::in_memory(
                config.s3_bucket.clone(),
                config.s3_public_host.clone(),
            )))
        }
    }
}
