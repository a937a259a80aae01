//! # Builders
//!
//! - [`params`] - [`CryptoParams`], the immutable configuration passed to
//!   key derivation, encryption and decryption
//!
//! Builders use a fluent `with_*` API over sensible defaults.

pub mod params;

pub use params::CryptoParams;
