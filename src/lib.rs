// src/lib.rs

//! Password-based file encryption.
//!
//! A password and a fresh 16-byte salt go through PBKDF2-HMAC-SHA256 to give
//! an AES-256 key; the PKCS#7-padded plaintext is encrypted in CBC mode under
//! a fresh 16-byte IV; the result is stored as one blob:
//!
//! ```text
//! offset 0   16 bytes  salt
//! offset 16  16 bytes  IV
//! offset 32  N bytes   ciphertext (N a positive multiple of 16)
//! ```
//!
//! There is no authentication tag. A wrong password is detected only through
//! the padding check and reported as [`AesFileError::InvalidPadding`].
//!
//! ```
//! use aesfile::{decrypt, encrypt, CryptoParams};
//!
//! let params = CryptoParams::new().with_iterations(1_000);
//! let container = encrypt(b"hello world", "correct horse battery staple", &params)?;
//! assert_eq!(container.len(), 48);
//!
//! let plaintext = decrypt(&container, "correct horse battery staple", &params)?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok::<(), aesfile::AesFileError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod files;
pub mod header;
pub mod padding;
pub mod utils;

// High-level API
pub use builders::CryptoParams;
pub use decryptor::decrypt;
pub use encryptor::{encrypt, encrypt_with_material};
pub use error::AesFileError;

pub use crypto::kdf::{derive_key, derive_secure_pbkdf2_key};

pub use files::{decrypt_file, encrypt_file, inspect_file};
pub use header::inspect;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, decrypt_files, encrypt_batch, encrypt_files};
