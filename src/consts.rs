//! # Constants
//!
//! Sizes of every container field and the PBKDF2 cost bounds.
//! Run-time values travel in [`CryptoParams`](crate::CryptoParams); these are
//! its defaults and the limits it validates against.

/// AES block size in bytes. Padding and ciphertext lengths are multiples of this.
pub const BLOCK_SIZE: usize = 16;

/// Length of the derived AES-256 key.
pub const KEY_LEN: usize = 32;

/// Length of the per-file PBKDF2 salt stored at offset 0 of the container.
pub const SALT_LEN: usize = 16;

/// Length of the CBC initialization vector stored at offset 16 of the container.
pub const IV_LEN: usize = 16;

/// Salt ‖ IV prefix. Anything shorter is not a container.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// Smallest possible container: header plus one block of padding.
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + BLOCK_SIZE;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Default PBKDF2-HMAC-SHA256 iteration count.
///
/// The container does not record it, so changing this default makes files
/// written with the old value undecryptable unless the old count is passed back in.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 100_000;

/// Suffix appended to encrypted outputs.
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Suffix substituted for [`ENCRYPTED_EXTENSION`] on decrypted outputs.
pub const DECRYPTED_EXTENSION: &str = "dec";
