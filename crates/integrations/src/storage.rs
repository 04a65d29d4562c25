//! Media file storage behind a provider trait.
//!
//! Uploaded files are persisted through [`MediaStorage`] so the HTTP layer
//! never touches the filesystem directly. [`LocalMediaStorage`] is the
//! only provider today: it writes under a configured root directory that
//! the server also exposes as static files.

use std::path::PathBuf;

use async_trait::async_trait;

/// Default on-disk root for stored media.
const DEFAULT_MEDIA_ROOT: &str = "./media";

/// Default public base URL under which stored files are served.
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000/media";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the storage provider.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The filename would escape the storage root or is empty.
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Underlying filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

/// Configuration for local media storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory files are written into.
    pub root: PathBuf,
    /// Public base URL the server maps onto `root`.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Variable           | Default                         |
    /// |--------------------|---------------------------------|
    /// | `MEDIA_ROOT`       | `./media`                       |
    /// | `MEDIA_PUBLIC_URL` | `http://localhost:3000/media`   |
    pub fn from_env() -> Self {
        Self {
            root: std::env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| DEFAULT_MEDIA_ROOT.to_string())
                .into(),
            public_base_url: std::env::var("MEDIA_PUBLIC_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MediaStorage
// ---------------------------------------------------------------------------

/// Persists uploaded media bytes and yields their public URLs.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `bytes` under `filename`, returning the public URL.
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Remove the file stored under `filename`. Missing files are not an
    /// error; deletion is idempotent.
    async fn delete(&self, filename: &str) -> Result<(), StorageError>;

    /// Public URL for a stored filename.
    fn public_url(&self, filename: &str) -> String;
}

/// Stores media on the local filesystem under a single flat directory.
pub struct LocalMediaStorage {
    config: StorageConfig,
}

impl LocalMediaStorage {
    /// Create a provider for the given configuration. The root directory
    /// is created lazily on first write.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Reject empty names and anything containing a path separator, so a
    /// crafted filename cannot reach outside the root.
    fn validate(filename: &str) -> Result<(), StorageError> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, StorageError> {
        Self::validate(filename)?;
        tokio::fs::create_dir_all(&self.config.root).await?;
        let path = self.config.root.join(filename);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(filename, size = bytes.len(), "Stored media file");
        Ok(self.public_url(filename))
    }

    async fn delete(&self, filename: &str) -> Result<(), StorageError> {
        Self::validate(filename)?;
        let path = self.config.root.join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", self.config.public_base_url, filename)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn provider(root: &std::path::Path) -> LocalMediaStorage {
        LocalMediaStorage::new(StorageConfig {
            root: root.to_path_buf(),
            public_base_url: "http://localhost:3000/media".into(),
        })
    }

    #[tokio::test]
    async fn store_then_delete_round_trip() {
        let dir = std::env::temp_dir().join(format!("ypsl-media-{}", std::process::id()));
        let storage = provider(&dir);

        let url = storage.store("slip.jpg", b"bytes").await.unwrap();
        assert_eq!(url, "http://localhost:3000/media/slip.jpg");
        assert_eq!(tokio::fs::read(dir.join("slip.jpg")).await.unwrap(), b"bytes");

        storage.delete("slip.jpg").await.unwrap();
        // Deleting again is a no-op.
        storage.delete("slip.jpg").await.unwrap();

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn traversal_filenames_are_rejected() {
        let dir = std::env::temp_dir();
        let storage = provider(&dir);
        let err = storage.store("../escape.jpg", b"x").await.unwrap_err();
        assert_matches!(err, StorageError::InvalidFilename(_));
        let err = storage.store("a/b.jpg", b"x").await.unwrap_err();
        assert_matches!(err, StorageError::InvalidFilename(_));
    }

    #[test]
    fn public_url_joins_base_and_filename() {
        let storage = provider(std::path::Path::new("/tmp"));
        assert_eq!(
            storage.public_url("YPSL-ORD-20260829-1234.png"),
            "http://localhost:3000/media/YPSL-ORD-20260829-1234.png"
        );
    }
}
