//! Upload sinks
//!
//! An [`UploadSink`] persists the raw bytes of an uploaded file before a
//! report is recorded for it. [`DiskSink`] writes into a directory on the
//! local filesystem.

mod errors;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

pub use errors::UploadError;

use crate::Result;

/// Destination for uploaded file contents.
#[async_trait]
pub trait UploadSink: Send + Sync {
    /// Persist `contents` under `file_name`, all or nothing.
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<()>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Writes uploads into a single directory, created on first use.
#[derive(Debug, Clone)]
pub struct DiskSink {
    dir: PathBuf,
}

impl DiskSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl UploadSink for DiskSink {
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<()> {
        let path = self.dir.join(file_name);
        let write = async {
            tokio::fs::create_dir_all(&self.dir).await?;
            tokio::fs::write(&path, contents).await
        };
        write.await.map_err(|source| UploadError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Reduce a client-supplied name to its final path component.
///
/// Browsers may send full paths (`C:\Users\me\scan.py`) and hostile clients
/// may send `../` segments; only the last component is kept. Names that
/// reduce to nothing, `.` or `..` are rejected.
pub fn sanitize_file_name(raw: &str) -> Result<String> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(UploadError::InvalidFileName {
            name: raw.to_string(),
        }
        .into());
    }
    Ok(name.to_string())
}
