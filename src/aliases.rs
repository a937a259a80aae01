//! # Secret Type Aliases
//!
//! Named buffers used across the crate. Secret values are wrapped in
//! [`zeroize::Zeroizing`] so they are wiped when dropped, on success and on
//! every `?` early return alike.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - PRF for PBKDF2 key derivation
//!
//! ### Secrets (wiped on drop)
//! - [`Aes256Key32`] - 32-byte derived AES-256 key
//! - [`Block16`] - one AES block of plaintext
//! - [`PasswordString`] - user password
//! - [`SecretBytes`] - padded plaintext / decrypted padded plaintext
//!
//! ### Public per-file values
//! - [`Salt16`] - 16-byte PBKDF2 salt
//! - [`Iv16`] - 16-byte CBC initialization vector
//!
//! Salt and IV are stored in clear at the front of every container, so they
//! are plain arrays.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::consts::{BLOCK_SIZE, IV_LEN, KEY_LEN, SALT_LEN};

pub type HmacSha256 = Hmac<Sha256>;

pub type Aes256Key32 = Zeroizing<[u8; KEY_LEN]>;
pub type Block16 = Zeroizing<[u8; BLOCK_SIZE]>;
pub type PasswordString = Zeroizing<String>;
pub type SecretBytes = Zeroizing<Vec<u8>>;

pub type Salt16 = [u8; SALT_LEN];
pub type Iv16 = [u8; IV_LEN];
