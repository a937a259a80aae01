//! # Container Header
//!
//! The first 32 bytes of every container: the PBKDF2 salt followed by the
//! CBC IV, both stored in clear.
//!
//! The format has no magic bytes or version field, so the only things that
//! can be checked without the password are the framing rules: at least 32
//! bytes, followed by a non-empty, block-aligned ciphertext.
//!
//! # Thread Safety
//!
//! All functions are pure and can be called concurrently.
//!
//! # Example
//!
//! ```
//! use aesfile::header::{inspect, read_header};
//! use std::io::Cursor;
//!
//! let mut container = vec![0x11u8; 16]; // salt
//! container.extend_from_slice(&[0x22u8; 16]); // IV
//! container.extend_from_slice(&[0x33u8; 32]); // two ciphertext blocks
//!
//! let header = read_header(Cursor::new(&container))?;
//! assert_eq!(header.iv, [0x22u8; 16]);
//!
//! let info = inspect(&container)?;
//! assert_eq!(info.ciphertext_len, 32);
//! assert_eq!(info.max_plaintext_len(), 31);
//! # Ok::<(), aesfile::AesFileError>(())
//! ```

use crate::aliases::{Iv16, Salt16};
use crate::consts::{BLOCK_SIZE, HEADER_LEN, SALT_LEN};
use crate::decryptor::read::{read_exact_span, validate_container_len};
use crate::error::AesFileError;
use std::io::Read;

/// Salt and IV of one container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerHeader {
    pub salt: Salt16,
    pub iv: Iv16,
}

impl ContainerHeader {
    /// Parse the header from the start of `bytes`.
    ///
    /// Only the length of the header itself is checked; use [`inspect`] to
    /// validate a whole container.
    pub fn parse(bytes: &[u8]) -> Result<Self, AesFileError> {
        if bytes.len() < HEADER_LEN {
            return Err(AesFileError::MalformedContainer(format!(
                "input is {} bytes, shorter than the {HEADER_LEN}-byte salt ‖ IV header",
                bytes.len()
            )));
        }

        let mut header = Self::default();
        header.salt.copy_from_slice(&bytes[..SALT_LEN]);
        header.iv.copy_from_slice(&bytes[SALT_LEN..HEADER_LEN]);
        Ok(header)
    }

    /// Serialized form: `salt ‖ iv`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..SALT_LEN].copy_from_slice(&self.salt);
        out[SALT_LEN..].copy_from_slice(&self.iv);
        out
    }
}

/// Read the 32-byte header from `reader`, leaving it positioned at the ciphertext.
pub fn read_header<R: Read>(mut reader: R) -> Result<ContainerHeader, AesFileError> {
    let bytes = read_exact_span::<_, HEADER_LEN>(&mut reader)?;
    ContainerHeader::parse(&bytes)
}

/// Framing summary of a container, obtained without the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    pub header: ContainerHeader,
    pub ciphertext_len: usize,
}

impl ContainerInfo {
    /// Build from a header and the total container size (e.g. file metadata).
    pub fn from_len(header: ContainerHeader, total_len: usize) -> Result<Self, AesFileError> {
        let ciphertext_len = validate_container_len(total_len)?;
        Ok(Self {
            header,
            ciphertext_len,
        })
    }

    #[must_use]
    pub const fn total_len(&self) -> usize {
        HEADER_LEN + self.ciphertext_len
    }

    /// Number of ciphertext blocks.
    #[must_use]
    pub const fn blocks(&self) -> usize {
        self.ciphertext_len / BLOCK_SIZE
    }

    /// Plaintext is between `ciphertext_len - 16` and `ciphertext_len - 1` bytes.
    #[must_use]
    pub const fn min_plaintext_len(&self) -> usize {
        self.ciphertext_len - BLOCK_SIZE
    }

    #[must_use]
    pub const fn max_plaintext_len(&self) -> usize {
        self.ciphertext_len - 1
    }
}

/// Validate the framing of `container` and report its header and sizes.
pub fn inspect(container: &[u8]) -> Result<ContainerInfo, AesFileError> {
    ContainerInfo::from_len(ContainerHeader::parse(container)?, container.len())
}
