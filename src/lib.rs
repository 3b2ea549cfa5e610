//! Self-describing salted password hashes.
//!
//! A hash carries the schema that produced it, so it can be verified later
//! without any other state:
//!
//! ```text
//! {PBKDF2/24/20000/24/sha256}<base64(digest ‖ salt)>
//! {SSHA256/24}<base64(digest ‖ salt)>
//! {SSHA}<base64(digest ‖ salt)>
//! {PLAIN}<base64(password)>
//! ```

mod algorithm;
mod crypto;
mod error;
mod format;
mod schema;

pub use crate::algorithm::{Algorithm, AlgorithmId};
pub use crate::crypto::{Pbkdf2Params, Prf};
pub use crate::error::{HashError, Result};
pub use crate::format::{decode, encode, split_envelope};
pub use crate::schema::{DEFAULT_SCHEMA, Schema};

use tracing::debug;
use zeroize::Zeroizing;

/// Hashes `password` with the given schema string.
///
/// PBKDF2 derivation runs on tokio's blocking pool.
pub async fn create(password: impl AsRef<[u8]>, schema: &str) -> Result<String> {
    let schema = Schema::parse(schema)?;
    let algorithm = schema.algorithm();

    let payload = if algorithm.is_expensive() {
        let algorithm = algorithm.clone();
        let password = Zeroizing::new(password.as_ref().to_vec());
        tokio::task::spawn_blocking(move || algorithm.create(&password)).await??
    } else {
        algorithm.create(password.as_ref())?
    };

    debug!(algorithm = %schema.id(), "created hash");
    Ok(encode(&schema, &payload))
}

/// Hashes `password` with [`DEFAULT_SCHEMA`].
pub async fn create_default(password: impl AsRef<[u8]>) -> Result<String> {
    create(password, DEFAULT_SCHEMA).await
}

/// Checks `password` against an encoded hash.
///
/// Returns `Ok(false)` for a wrong password and an error for a hash that
/// cannot be parsed.
pub async fn verify(password: impl AsRef<[u8]>, encoded: &str) -> Result<bool> {
    let (schema, payload) = decode(encoded)?;

    let matched = if schema.algorithm().is_expensive() {
        let algorithm = schema.algorithm().clone();
        let password = Zeroizing::new(password.as_ref().to_vec());
        tokio::task::spawn_blocking(move || algorithm.verify(&password, &payload)).await??
    } else {
        schema.algorithm().verify(password.as_ref(), &payload)?
    };

    debug!(algorithm = %schema.id(), matched, "verified hash");
    Ok(matched)
}

/// Blocking counterpart of [`create`], for callers without a runtime.
pub fn create_blocking(password: impl AsRef<[u8]>, schema: &str) -> Result<String> {
    let schema = Schema::parse(schema)?;
    let payload = schema.algorithm().create(password.as_ref())?;
    Ok(encode(&schema, &payload))
}

/// Blocking counterpart of [`verify`].
pub fn verify_blocking(password: impl AsRef<[u8]>, encoded: &str) -> Result<bool> {
    let (schema, payload) = decode(encoded)?;
    schema.algorithm().verify(password.as_ref(), &payload)
}
