//! The closed set of supported hash constructions.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    crypto::{
        self, MAX_BUFFER_LEN, Pbkdf2Params, Prf, SHA1_LEN, SHA256_LEN, SSHA_SALT_LEN,
        constant_time_eq, generate_salt, split_salted,
    },
    error::{HashError, Result},
};

/// Algorithm identifier, the first element of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    Pbkdf2,
    Ssha256,
    Ssha,
    Plain,
}

impl AlgorithmId {
    /// Every supported identifier.
    pub const ALL: [AlgorithmId; 4] = [
        AlgorithmId::Pbkdf2,
        AlgorithmId::Ssha256,
        AlgorithmId::Ssha,
        AlgorithmId::Plain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Pbkdf2 => "PBKDF2",
            AlgorithmId::Ssha256 => "SSHA256",
            AlgorithmId::Ssha => "SSHA",
            AlgorithmId::Plain => "PLAIN",
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| HashError::UnknownSchema(s.to_string()))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hash construction together with its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// `PBKDF2/<saltSize>/<iterations>/<hashSize>/<digest>`
    Pbkdf2(Pbkdf2Params),
    /// `SSHA256/<saltSize>`
    Ssha256 { salt_size: usize },
    /// `SSHA`, SHA-1 with an 8 byte salt
    Ssha,
    /// `PLAIN`, the password itself
    Plain,
}

impl Algorithm {
    /// Builds the algorithm named by `id` from the schema parameters following it.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MissingParameter`] when a required parameter is
    /// absent or not a number, and [`HashError::InvalidParameter`] or
    /// [`HashError::UnsupportedDigest`] when a parameter is out of range.
    pub fn from_params(id: AlgorithmId, params: &[&str]) -> Result<Self> {
        match id {
            AlgorithmId::Pbkdf2 => {
                let salt_size = number(id, params, 0, "saltSize")?;
                let iterations = number(id, params, 1, "iterations")?;
                let hash_size = number(id, params, 2, "hashSize")?;
                let prf: Prf = param(id, params, 3, "digest")?.parse()?;
                Ok(Algorithm::Pbkdf2(Pbkdf2Params::new(
                    salt_size, iterations, hash_size, prf,
                )?))
            }
            AlgorithmId::Ssha256 => {
                let salt_size = number(id, params, 0, "saltSize")?;
                if salt_size > MAX_BUFFER_LEN {
                    return Err(HashError::InvalidParameter {
                        algorithm: id.as_str(),
                        parameter: "saltSize",
                        reason: "too large",
                    });
                }
                Ok(Algorithm::Ssha256 { salt_size })
            }
            AlgorithmId::Ssha => Ok(Algorithm::Ssha),
            AlgorithmId::Plain => Ok(Algorithm::Plain),
        }
    }

    pub fn id(&self) -> AlgorithmId {
        match self {
            Algorithm::Pbkdf2(_) => AlgorithmId::Pbkdf2,
            Algorithm::Ssha256 { .. } => AlgorithmId::Ssha256,
            Algorithm::Ssha => AlgorithmId::Ssha,
            Algorithm::Plain => AlgorithmId::Plain,
        }
    }

    /// Number of trailing salt bytes in the stored payload.
    pub fn salt_size(&self) -> usize {
        match self {
            Algorithm::Pbkdf2(params) => params.salt_size(),
            Algorithm::Ssha256 { salt_size } => *salt_size,
            Algorithm::Ssha => SSHA_SALT_LEN,
            Algorithm::Plain => 0,
        }
    }

    /// Whether computing the digest is slow enough to belong on a blocking thread.
    pub fn is_expensive(&self) -> bool {
        matches!(self, Algorithm::Pbkdf2(_))
    }

    /// Digest of `password ‖ salt` for this construction. PLAIN ignores the salt.
    pub fn digest(&self, password: &[u8], salt: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Pbkdf2(params) => crypto::derive_key(password, salt, params),
            Algorithm::Ssha256 { .. } => crypto::ssha256(password, salt).to_vec(),
            Algorithm::Ssha => crypto::ssha(password, salt).to_vec(),
            Algorithm::Plain => password.to_vec(),
        }
    }

    /// Produces the stored payload, `digest ‖ salt`, for a fresh random salt.
    pub fn create(&self, password: &[u8]) -> Result<Vec<u8>> {
        let salt = generate_salt(self.salt_size())?;

        let mut payload = self.digest(password, &salt);
        payload.extend_from_slice(&salt);

        debug!(
            algorithm = %self.id(),
            payload_len = payload.len(),
            "created salted digest"
        );
        Ok(payload)
    }

    /// Recomputes the digest over `password` and the payload's salt and
    /// compares it with the payload's digest in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::MalformedHash`] if the payload length does not
    /// match the algorithm's digest and salt sizes.
    pub fn verify(&self, password: &[u8], payload: &[u8]) -> Result<bool> {
        let (digest, salt) = match self {
            Algorithm::Pbkdf2(params) => {
                split_salted(payload, params.hash_size(), params.salt_size())?
            }
            Algorithm::Ssha256 { salt_size } => split_salted(payload, SHA256_LEN, *salt_size)?,
            Algorithm::Ssha => split_salted(payload, SHA1_LEN, SSHA_SALT_LEN)?,
            Algorithm::Plain => (payload, &[][..]),
        };
        let matched = constant_time_eq(&self.digest(password, salt), digest);

        debug!(algorithm = %self.id(), matched, "verified salted digest");
        Ok(matched)
    }
}

fn param<'a>(
    id: AlgorithmId,
    params: &[&'a str],
    index: usize,
    parameter: &'static str,
) -> Result<&'a str> {
    params
        .get(index)
        .copied()
        .filter(|value| !value.is_empty())
        .ok_or(HashError::MissingParameter {
            algorithm: id.as_str(),
            parameter,
        })
}

fn number<T: FromStr>(
    id: AlgorithmId,
    params: &[&str],
    index: usize,
    parameter: &'static str,
) -> Result<T> {
    param(id, params, index, parameter)?
        .parse()
        .map_err(|_| HashError::MissingParameter {
            algorithm: id.as_str(),
            parameter,
        })
}
