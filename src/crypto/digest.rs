use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Length of a SHA-1 digest.
pub const SHA1_LEN: usize = 20;
/// Length of a SHA-256 digest.
pub const SHA256_LEN: usize = 32;

/// SHA-1(password ‖ salt), the SSHA construction.
pub fn ssha(password: &[u8], salt: &[u8]) -> [u8; SHA1_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.finalize().into()
}

/// SHA-256(password ‖ salt), the SSHA256 construction.
pub fn ssha256(password: &[u8], salt: &[u8]) -> [u8; SHA256_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.finalize().into()
}
