// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, &password, &params)?` returns the container.
//! Deterministic: `encrypt_with_material` with caller-supplied salt and IV.
//! Building blocks: `encrypt_cbc` and the `write_*` header helpers.

pub(crate) mod cbc;
pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed_session;
pub(crate) mod write;

pub use cbc::encrypt_cbc;
pub use encrypt::{encrypt, encrypt_to_writer};
pub use encrypt_fixed_session::encrypt_with_material;
pub use write::{write_header, write_iv, write_octets, write_salt};
