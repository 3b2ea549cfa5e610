//! Digest engine: salts, key derivation, salted hashes and comparison.

pub mod digest;
pub mod kdf;
pub mod random;

pub use digest::{SHA1_LEN, SHA256_LEN, ssha, ssha256};
pub use kdf::{Pbkdf2Params, Prf, derive_key};
pub use random::generate_salt;

use subtle::ConstantTimeEq;

use crate::error::{HashError, Result};

/// Length of the fixed SSHA salt (8 bytes).
pub const SSHA_SALT_LEN: usize = 8;
/// Upper bound for configurable salt and derived key sizes (64 KiB).
pub const MAX_BUFFER_LEN: usize = 64 * 1024;

/// Splits a decoded payload into its leading digest and trailing salt.
///
/// # Errors
///
/// Returns [`HashError::MalformedHash`] unless the payload is exactly
/// `digest_len + salt_len` bytes long.
pub fn split_salted(payload: &[u8], digest_len: usize, salt_len: usize) -> Result<(&[u8], &[u8])> {
    let expected = digest_len
        .checked_add(salt_len)
        .ok_or_else(|| HashError::malformed("digest and salt sizes overflow"))?;

    if payload.len() != expected {
        return Err(HashError::malformed(format!(
            "expected {expected} payload bytes, found {}",
            payload.len()
        )));
    }

    Ok(payload.split_at(digest_len))
}

/// Compares two buffers in time independent of their contents.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
