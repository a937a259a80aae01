// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, secure randomness).
//!
//! The PBKDF2 PRF type lives in `aliases.rs`.

pub mod kdf;
pub mod rng;
