//! src/encryptor/encrypt.rs
//! Password-based encryption: fresh salt and IV, PBKDF2 key, AES-256-CBC.

use crate::aliases::{Iv16, Salt16};
use crate::builders::CryptoParams;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::encrypt_fixed_session::encrypt_with_material;
use crate::encryptor::write::write_octets;
use crate::error::AesFileError;
use std::io::{Read, Write};
use zeroize::Zeroizing;

/// Encrypt `plaintext` with `password` and return the container
/// `salt ‖ IV ‖ ciphertext`.
///
/// Salt and IV come from the OS random source on every call, so encrypting the
/// same input twice gives two different containers. The derived key and the
/// padded plaintext are wiped before this returns, including on error.
///
/// # Errors
///
/// - [`AesFileError::Kdf`] - empty password or invalid iteration count
/// - [`AesFileError::RandomSource`] - the OS random source failed
pub fn encrypt(
    plaintext: &[u8],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<u8>, AesFileError> {
    // Validate before drawing randomness.
    params.validate()?;
    if password.is_empty() {
        return Err(AesFileError::Kdf("empty password".into()));
    }

    let salt = <Salt16 as SecureRandomExt>::try_random()?;
    let iv = <Iv16 as SecureRandomExt>::try_random()?;

    encrypt_with_material(plaintext, password, params, &salt, &iv)
}

/// Read all of `input`, encrypt it and write the container to `output`.
///
/// Returns the number of container bytes written. The whole input is held in
/// memory (in a buffer that is wiped afterwards).
pub fn encrypt_to_writer<R, W>(
    mut input: R,
    mut output: W,
    password: &str,
    params: &CryptoParams,
) -> Result<usize, AesFileError>
where
    R: Read,
    W: Write,
{
    let mut plaintext = Zeroizing::new(Vec::new());
    input.read_to_end(&mut plaintext)?;

    let container = encrypt(&plaintext, password, params)?;
    write_octets(&mut output, &container)?;
    output.flush()?;

    Ok(container.len())
}
