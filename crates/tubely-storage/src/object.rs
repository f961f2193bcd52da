use crate::traits::{Storage, StorageError, StorageResult};
use crate::{assets, StorageBackend};
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, ObjectStore, ObjectStoreExt, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::sync::Arc;

/// Remote storage over any `object_store` backend.
#[derive(Clone)]
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    backend: StorageBackend,
    bucket: String,
    public_host: String,
}

impl ObjectStorage {
    /// Wrap an existing store.
    ///
    /// `bucket` and `public_host` only feed public URLs:
    /// `http://{bucket}.{public_host}/{key}`.
    pub fn new(
        store: Arc<dyn ObjectStore>,
        backend: StorageBackend,
        bucket: impl Into<String>,
        public_host: impl Into<String>,
    ) -> Self {
        ObjectStorage {
            store,
            backend,
            bucket: bucket.into(),
            public_host: public_host.into(),
        }
    }

    /// Create an S3-backed store
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    /// * `public_host` - Host suffix for public URLs (e.g., "s3.amazonaws.com")
    pub fn s3(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
        public_host: String,
    ) -> StorageResult<Self> {
        // Credentials come from the usual AWS_* environment variables.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder.with_endpoint(endpoint).with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(Self::new(
            Arc::new(store),
            StorageBackend::S3,
            bucket,
            public_host,
        ))
    }

    /// In-process store. Objects vanish with the process.
    pub fn in_memory(bucket: impl Into<String>, public_host: impl Into<String>) -> Self {
        Self::new(
            Arc::new(InMemory::new()),
            StorageBackend::Memory,
            bucket,
            public_host,
        )
    }

    /// The underlying store, for reading objects back.
    pub fn store(&self) -> Arc<dyn ObjectStore> {
        Arc::clone(&self.store)
    }

    fn location(key: &str) -> StorageResult<Path> {
        if key.is_empty() || key.starts_with('/') || key.contains("..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Path::parse(key).map_err(|e| StorageError::InvalidKey(e.to_string()))
    }
}

#[async_trait]
impl Storage for ObjectStorage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<()> {
        let location = Self::location(key)?;
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let result: ObjectResult<_> = self
            .store
            .put_opts(&location, PutPayload::from(data), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            backend = %self.backend,
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object upload successful"
        );

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        assets::remote_url(&self.bucket, &self.public_host, key)
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let location = Self::location(key)?;
        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        self.backend
    }
}
