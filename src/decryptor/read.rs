//! src/decryptor/read.rs
//! Container framing checks and the salt / IV / ciphertext split.

use crate::consts::{BLOCK_SIZE, HEADER_LEN, IV_LEN, SALT_LEN};
use crate::error::AesFileError;
use crate::header::ContainerHeader;
use std::io::{ErrorKind, Read};

/// Read exactly `N` bytes into a stack-allocated `[u8; N]`.
///
/// A short read means the input ended inside the header, which is reported as
/// [`AesFileError::MalformedContainer`] rather than an I/O failure.
#[inline]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], AesFileError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => AesFileError::MalformedContainer(format!(
            "input ended before the {HEADER_LEN}-byte salt ‖ IV header"
        )),
        _ => AesFileError::Io(e),
    })?;
    Ok(buf)
}

/// Check the framing rules for a container of `len` bytes and return the
/// ciphertext length.
///
/// A container is at least [`HEADER_LEN`] bytes and its ciphertext is a
/// non-empty multiple of [`BLOCK_SIZE`].
pub fn validate_container_len(len: usize) -> Result<usize, AesFileError> {
    if len < HEADER_LEN {
        return Err(AesFileError::MalformedContainer(format!(
            "input is {len} bytes, shorter than the {HEADER_LEN}-byte salt ‖ IV header"
        )));
    }

    let ciphertext_len = len - HEADER_LEN;
    if ciphertext_len == 0 || ciphertext_len % BLOCK_SIZE != 0 {
        return Err(AesFileError::MalformedContainer(format!(
            "ciphertext is {ciphertext_len} bytes, expected a positive multiple of {BLOCK_SIZE}"
        )));
    }

    Ok(ciphertext_len)
}

/// Split a container into its header and ciphertext after validating framing.
pub fn split_container(container: &[u8]) -> Result<(ContainerHeader, &[u8]), AesFileError> {
    validate_container_len(container.len())?;

    let (salt, rest) = container.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);

    let mut header = ContainerHeader::default();
    header.salt.copy_from_slice(salt);
    header.iv.copy_from_slice(iv);

    Ok((header, ciphertext))
}
