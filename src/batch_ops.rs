//! Parallel batch encryption and decryption (feature `batch-ops`).
//!
//! Every item is an independent encrypt/decrypt call with its own salt, IV
//! and key, so items run on rayon's pool without coordination. The batch
//! returns the first error encountered; outputs of file batches that already
//! completed stay on disk. File batch errors are wrapped in
//! [`AesFileError::InFile`] with the failing input path.

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::builders::CryptoParams;
use crate::files::{decrypt_file, encrypt_file};
use crate::{decrypt, encrypt, AesFileError};

pub fn encrypt_batch<T>(
    plaintexts: &[T],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<Vec<u8>>, AesFileError>
where
    T: AsRef<[u8]> + Sync,
{
    plaintexts
        .par_iter()
        .map(|plaintext| encrypt(plaintext.as_ref(), password, params))
        .collect()
}

pub fn decrypt_batch<T>(
    containers: &[T],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<Vec<u8>>, AesFileError>
where
    T: AsRef<[u8]> + Sync,
{
    containers
        .par_iter()
        .map(|container| decrypt(container.as_ref(), password, params))
        .collect()
}

/// Encrypt each file to its default `<name>.enc` output.
pub fn encrypt_files<P>(
    paths: &[P],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<PathBuf>, AesFileError>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            encrypt_file(path, password, params, None).map_err(|e| AesFileError::in_file(path, e))
        })
        .collect()
}

/// Decrypt each `.enc` file to its default `<name>.dec` output.
pub fn decrypt_files<P>(
    paths: &[P],
    password: &str,
    params: &CryptoParams,
) -> Result<Vec<PathBuf>, AesFileError>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            decrypt_file(path, password, params, None).map_err(|e| AesFileError::in_file(path, e))
        })
        .collect()
}
