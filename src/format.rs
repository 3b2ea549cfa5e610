//! The `{schema}base64` envelope.
//!
//! ```text
//! { SCHEMA } BASE64(DIGEST ‖ SALT)
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::{
    error::{HashError, Result},
    schema::Schema,
};

const OPEN: char = '{';
const CLOSE: char = '}';

/// Splits an encoded hash into its raw schema string and base64 text.
///
/// The schema ends at the first `}`.
///
/// # Errors
///
/// Returns [`HashError::MalformedHash`] if the text does not start with `{`
/// or contains no `}`.
pub fn split_envelope(encoded: &str) -> Result<(&str, &str)> {
    let rest = encoded
        .strip_prefix(OPEN)
        .ok_or_else(|| HashError::malformed("missing '{' prefix"))?;
    let end = rest
        .find(CLOSE)
        .ok_or_else(|| HashError::malformed("missing '}' after schema"))?;

    Ok((&rest[..end], &rest[end + CLOSE.len_utf8()..]))
}

/// Parses an encoded hash into its schema and decoded payload.
///
/// # Errors
///
/// Returns an error if:
/// - The envelope is missing
/// - The schema is unknown or incomplete
/// - The payload is not valid base64
pub fn decode(encoded: &str) -> Result<(Schema, Vec<u8>)> {
    let (schema, payload) = split_envelope(encoded)?;
    let schema = Schema::parse(schema)?;
    let payload = BASE64
        .decode(payload)
        .map_err(|e| HashError::malformed(format!("invalid base64 payload: {e}")))?;

    Ok((schema, payload))
}

/// Encodes a schema and payload as `{schema}base64(payload)`.
pub fn encode(schema: &Schema, payload: &[u8]) -> String {
    format!("{OPEN}{schema}{CLOSE}{}", BASE64.encode(payload))
}
