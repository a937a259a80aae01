//! src/encryptor/write.rs
//! Container write helpers: salt ‖ IV ‖ ciphertext.

use crate::aliases::{Iv16, Salt16};
use crate::error::AesFileError;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), AesFileError> {
    writer.write_all(data).map_err(AesFileError::Io)
}

#[inline]
pub fn write_salt<W: Write>(writer: &mut W, salt: &Salt16) -> Result<(), AesFileError> {
    write_octets(writer, salt)
}

#[inline]
pub fn write_iv<W: Write>(writer: &mut W, iv: &Iv16) -> Result<(), AesFileError> {
    write_octets(writer, iv)
}

/// Write the 32-byte container header (salt at offset 0, IV at offset 16).
#[inline]
pub fn write_header<W: Write>(
    writer: &mut W,
    salt: &Salt16,
    iv: &Iv16,
) -> Result<(), AesFileError> {
    write_salt(writer, salt)?;
    write_iv(writer, iv)
}
