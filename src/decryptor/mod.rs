// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(container, &password, &params)?` returns the plaintext.
//! Helpers: `split_container`, `validate_container_len`, `decrypt_cbc` for
//! custom flows.

pub(crate) mod cbc;
pub(crate) mod decrypt;
pub(crate) mod read;

pub use cbc::decrypt_cbc;
pub use decrypt::{decrypt, decrypt_to_writer};
pub use read::{read_exact_span, split_container, validate_container_len};
