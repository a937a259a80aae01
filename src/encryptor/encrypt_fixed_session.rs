//! src/encryptor/encrypt_fixed_session.rs
//! Deterministic encryption with caller-chosen salt and IV (for known-answer
//! tests and cross-implementation vectors).

use crate::aliases::{Iv16, Salt16};
use crate::builders::CryptoParams;
use crate::consts::HEADER_LEN;
use crate::crypto::kdf::derive_key;
use crate::encryptor::cbc::encrypt_cbc;
use crate::encryptor::write::write_header;
use crate::error::AesFileError;
use crate::padding::pad;

/// Encrypt `plaintext` into a container using the given `salt` and `iv`.
///
/// Reusing an IV with the same password and salt leaks equality of leading
/// plaintext blocks. [`encrypt`](crate::encrypt) draws both fresh on every call;
/// use this only when the output must be reproducible.
pub fn encrypt_with_material(
    plaintext: &[u8],
    password: &str,
    params: &CryptoParams,
    salt: &Salt16,
    iv: &Iv16,
) -> Result<Vec<u8>, AesFileError> {
    let key = derive_key(password, salt, params)?;
    let padded = pad(plaintext);

    let mut container = Vec::with_capacity(HEADER_LEN + padded.len());
    write_header(&mut container, salt, iv)?;
    encrypt_cbc(&key, iv, &padded, &mut container);

    tracing::debug!(
        plaintext_len = plaintext.len(),
        container_len = container.len(),
        "encrypted container"
    );
    Ok(container)
}
