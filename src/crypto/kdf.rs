use std::{fmt, str::FromStr};

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use super::MAX_BUFFER_LEN;
use crate::error::{HashError, Result};

const ALGORITHM: &str = "PBKDF2";

/// Pseudorandom function used inside PBKDF2, named the way OpenSSL names digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prf {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Prf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prf::Sha1 => "sha1",
            Prf::Sha224 => "sha224",
            Prf::Sha256 => "sha256",
            Prf::Sha384 => "sha384",
            Prf::Sha512 => "sha512",
        }
    }
}

impl FromStr for Prf {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Prf::Sha1),
            "sha224" => Ok(Prf::Sha224),
            "sha256" => Ok(Prf::Sha256),
            "sha384" => Ok(Prf::Sha384),
            "sha512" => Ok(Prf::Sha512),
            _ => Err(HashError::UnsupportedDigest(s.to_string())),
        }
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Params {
    salt_size: usize,
    iterations: u32,
    hash_size: usize,
    prf: Prf,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            salt_size: 24,
            iterations: 20_000,
            hash_size: 24,
            prf: Prf::Sha256,
        }
    }
}

impl Pbkdf2Params {
    pub fn new(salt_size: usize, iterations: u32, hash_size: usize, prf: Prf) -> Result<Self> {
        let params = Self {
            salt_size,
            iterations,
            hash_size,
            prf,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn salt_size(&self) -> usize {
        self.salt_size
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    pub fn prf(&self) -> Prf {
        self.prf
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |parameter, reason| HashError::InvalidParameter {
            algorithm: ALGORITHM,
            parameter,
            reason,
        };

        if self.iterations < 1 {
            return Err(invalid("iterations", "must be >= 1"));
        }
        if self.hash_size < 1 {
            return Err(invalid("hashSize", "must be >= 1"));
        }
        if self.hash_size > MAX_BUFFER_LEN {
            return Err(invalid("hashSize", "too large"));
        }
        if self.salt_size > MAX_BUFFER_LEN {
            return Err(invalid("saltSize", "too large"));
        }
        Ok(())
    }
}

/// Derive `hash_size` bytes from password and salt. Runs `iterations` rounds,
/// so callers on an async runtime should move this onto a blocking thread.
pub fn derive_key(password: &[u8], salt: &[u8], params: &Pbkdf2Params) -> Vec<u8> {
    let mut key = vec![0u8; params.hash_size];
    let rounds = params.iterations;

    match params.prf {
        Prf::Sha1 => pbkdf2_hmac::<Sha1>(password, salt, rounds, &mut key),
        Prf::Sha224 => pbkdf2_hmac::<Sha224>(password, salt, rounds, &mut key),
        Prf::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut key),
        Prf::Sha384 => pbkdf2_hmac::<Sha384>(password, salt, rounds, &mut key),
        Prf::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut key),
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::tests::hex;

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 16];
        let params = Pbkdf2Params::new(16, 100, 24, Prf::Sha256).unwrap();

        let k1 = derive_key(b"password", &salt, &params);
        let k2 = derive_key(b"password", &salt, &params);

        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 24);
    }

    #[test]
    fn kdf_params_affect_output() {
        let salt = [7u8; 16];

        let p1 = Pbkdf2Params::new(16, 10, 32, Prf::Sha256).unwrap();
        let p2 = Pbkdf2Params::new(16, 11, 32, Prf::Sha256).unwrap();
        let p3 = Pbkdf2Params::new(16, 10, 32, Prf::Sha512).unwrap();

        let k1 = derive_key(b"pw", &salt, &p1);
        assert_ne!(k1, derive_key(b"pw", &salt, &p2));
        assert_ne!(k1, derive_key(b"pw", &salt, &p3));
    }

    #[test]
    fn pbkdf2_sha1_known_answers() {
        let one = Pbkdf2Params::new(4, 1, 20, Prf::Sha1).unwrap();
        assert_eq!(
            derive_key(b"password", b"salt", &one),
            hex("0c60c80f961f0e71f3a9b524af6012062fe037a6")
        );

        let two = Pbkdf2Params::new(4, 2, 20, Prf::Sha1).unwrap();
        assert_eq!(
            derive_key(b"password", b"salt", &two),
            hex("ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957")
        );
    }

    #[test]
    fn pbkdf2_sha256_known_answer() {
        let params = Pbkdf2Params::new(4, 1, 16, Prf::Sha256).unwrap();
        assert_eq!(
            derive_key(b"passwd", b"salt", &params),
            hex("55ac046e56e3089fec1691c22544b605")
        );
    }

    #[test]
    fn kdf_invalid_params_fail_gracefully() {
        assert!(Pbkdf2Params::new(24, 0, 24, Prf::Sha256).is_err());
        assert!(Pbkdf2Params::new(24, 1, 0, Prf::Sha256).is_err());
        assert!(Pbkdf2Params::new(usize::MAX, 1, 24, Prf::Sha256).is_err());
    }

    #[test]
    fn prf_names_are_case_insensitive() {
        assert_eq!("SHA256".parse::<Prf>().unwrap(), Prf::Sha256);
        assert_eq!("sha1".parse::<Prf>().unwrap(), Prf::Sha1);
        assert!(matches!(
            "md5".parse::<Prf>(),
            Err(HashError::UnsupportedDigest(name)) if name == "md5"
        ));
    }
}
