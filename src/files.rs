//! # File Operations
//!
//! Path-level wrappers around [`encrypt`] and [`decrypt`]: the whole input file
//! is read into memory, transformed, and the result is written next to it.
//!
//! ## Output naming
//!
//! - encrypt: `notes.txt` → `notes.txt.enc`
//! - decrypt: `notes.txt.enc` → `notes.txt.dec`
//!
//! A decryption input without a trailing `.enc` has no derived name; callers
//! must pass an explicit output path.
//!
//! ## Atomicity
//!
//! Output is written to a temporary file in the destination directory and
//! renamed into place only after the full result is on disk. A failed
//! operation (wrong password, I/O error) leaves no output behind.

use crate::builders::CryptoParams;
use crate::consts::{DECRYPTED_EXTENSION, ENCRYPTED_EXTENSION};
use crate::decryptor::decrypt;
use crate::encryptor::encrypt;
use crate::error::AesFileError;
use crate::header::{read_header, ContainerInfo};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// `<path>.enc`
#[must_use]
pub fn encrypted_output_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ENCRYPTED_EXTENSION);
    PathBuf::from(name)
}

/// Replace a trailing `.enc` with `.dec`.
///
/// # Errors
///
/// [`AesFileError::InvalidOutputPath`] if `path` does not end in `.enc`.
pub fn decrypted_output_path(path: &Path) -> Result<PathBuf, AesFileError> {
    match path.extension() {
        Some(ext) if ext == ENCRYPTED_EXTENSION => Ok(path.with_extension(DECRYPTED_EXTENSION)),
        _ => Err(AesFileError::InvalidOutputPath(format!(
            "{} does not end in .{ENCRYPTED_EXTENSION}; an explicit output path is required",
            path.display()
        ))),
    }
}

/// Encrypt the file at `input`.
///
/// Writes to `output` when given, otherwise to [`encrypted_output_path`].
/// Returns the path written.
pub fn encrypt_file(
    input: &Path,
    password: &str,
    params: &CryptoParams,
    output: Option<&Path>,
) -> Result<PathBuf, AesFileError> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => encrypted_output_path(input),
    };
    ensure_distinct(input, &output)?;

    let plaintext = Zeroizing::new(fs::read(input)?);
    let container = encrypt(&plaintext, password, params)?;
    write_atomically(&output, &container)?;

    info!(input = %input.display(), output = %output.display(), "encrypted file");
    Ok(output)
}

/// Decrypt the container file at `input`.
///
/// Writes to `output` when given, otherwise to [`decrypted_output_path`].
/// Returns the path written.
pub fn decrypt_file(
    input: &Path,
    password: &str,
    params: &CryptoParams,
    output: Option<&Path>,
) -> Result<PathBuf, AesFileError> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => decrypted_output_path(input)?,
    };
    ensure_distinct(input, &output)?;

    let container = fs::read(input)?;
    let plaintext = Zeroizing::new(decrypt(&container, password, params)?);
    write_atomically(&output, &plaintext)?;

    info!(input = %input.display(), output = %output.display(), "decrypted file");
    Ok(output)
}

/// Check the framing of a container file without reading its ciphertext.
pub fn inspect_file(path: &Path) -> Result<ContainerInfo, AesFileError> {
    let total_len = usize::try_from(fs::metadata(path)?.len()).map_err(|_| {
        AesFileError::MalformedContainer(format!("{} is too large", path.display()))
    })?;
    let header = read_header(BufReader::new(File::open(path)?))?;
    ContainerInfo::from_len(header, total_len)
}

fn ensure_distinct(input: &Path, output: &Path) -> Result<(), AesFileError> {
    let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        return Err(AesFileError::InvalidOutputPath(format!(
            "output {} would overwrite the input",
            output.display()
        )));
    }
    Ok(())
}

fn write_atomically(output: &Path, bytes: &[u8]) -> Result<(), AesFileError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    debug!(tmp = %tmp.path().display(), len = bytes.len(), "staged output");

    tmp.persist(output).map_err(|e| AesFileError::Io(e.error))?;
    Ok(())
}
