//! # Error Types
//!
//! Every fallible operation returns [`Result<T, AesFileError>`](AesFileError).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for all encryption, decryption and file operations.
#[derive(Error, Debug)]
pub enum AesFileError {
    /// Reading the source or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operating system's secure random source could not be read.
    ///
    /// Encryption aborts; there is no fallback generator.
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    /// The input cannot be a container: shorter than the salt ‖ IV header,
    /// or the ciphertext part is empty or not block-aligned.
    #[error("not a valid encrypted file: {0}")]
    MalformedContainer(String),

    /// Padding validation failed after CBC decryption.
    ///
    /// Raised for a wrong password and for corrupted ciphertext alike; the two
    /// are indistinguishable.
    #[error("decryption failed")]
    InvalidPadding,

    /// Key derivation was called with an empty password, a salt of the wrong
    /// length, or an out-of-range iteration count.
    #[error("key derivation error: {0}")]
    Kdf(String),

    /// No output path could be derived, or the output would overwrite the input.
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),

    /// A file-level batch item failed; `path` is the input that failed.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        source: Box<AesFileError>,
    },
}

impl AesFileError {
    /// `true` for failures caused by the container contents rather than the
    /// environment (malformed framing or a padding check).
    #[must_use]
    pub fn is_rejected_input(&self) -> bool {
        match self {
            Self::MalformedContainer(_) | Self::InvalidPadding => true,
            Self::InFile { source, .. } => source.is_rejected_input(),
            _ => false,
        }
    }

    /// Attach the input path to a per-file error.
    pub(crate) fn in_file(path: &Path, err: AesFileError) -> Self {
        Self::InFile {
            path: path.to_path_buf(),
            source: Box::new(err),
        }
    }
}
