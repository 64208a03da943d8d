//! Upload error types.

use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while accepting an uploaded file.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum UploadError {
    /// The submitted name has no usable final path component.
    #[error("Invalid file name: {name:?}")]
    InvalidFileName {
        /// The name as submitted by the client
        name: String,
    },

    /// The request carried no file field.
    #[error("No file was submitted")]
    MissingFile,

    /// The multipart body could not be read.
    #[error("Malformed upload: {reason}")]
    Malformed {
        /// Description from the multipart parser
        reason: String,
    },

    /// Persisting the file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UploadError {
    /// Check if this error was caused by the client's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            UploadError::InvalidFileName { .. }
                | UploadError::MissingFile
                | UploadError::Malformed { .. }
        )
    }

    /// Check if this error came from the filesystem.
    pub fn is_io_error(&self) -> bool {
        matches!(self, UploadError::Write { .. })
    }
}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
    }
}
