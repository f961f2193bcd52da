//! Storage setup: the local assets root and the remote object store

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_storage::{create_remote_storage, LocalStorage, Storage};

pub async fn setup_storage(config: &Config) -> Result<(LocalStorage, Arc<dyn Storage>)> {
    let assets = LocalStorage::new(
        config.assets_root.clone(),
        config.asset_host.clone(),
        config.server_port,
    )
    .await
    .context("Failed to prepare assets directory")?;

    let remote = create_remote_storage(config).context("Failed to create remote storage")?;

    tracing::info!(
        assets_root = %assets.root().display(),
        backend = %remote.backend_type(),
        bucket = %config.s3_bucket,
        "Storage initialized"
    );

    Ok((assets, remote))
}
