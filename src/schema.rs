//! The `/`-delimited schema string, e.g. `PBKDF2/24/20000/24/sha256`.

use std::{fmt, str::FromStr};

use crate::{
    algorithm::{Algorithm, AlgorithmId},
    error::{HashError, Result},
};

/// Schema used when the caller does not name one.
pub const DEFAULT_SCHEMA: &str = "PBKDF2/24/20000/24/sha256";
/// Separator between schema elements.
pub const SEPARATOR: char = '/';

/// A parsed schema.
///
/// Keeps the raw elements so that serializing yields exactly the string that
/// was parsed, including any trailing elements the algorithm does not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    parts: Vec<String>,
    algorithm: Algorithm,
}

impl Schema {
    /// Parses a schema string and validates the algorithm's parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The schema contains `}`
    /// - The algorithm identifier is unknown
    /// - A required parameter is missing, non-numeric or out of range
    pub fn parse(schema: &str) -> Result<Self> {
        if schema.contains('}') {
            return Err(HashError::malformed("schema must not contain '}'"));
        }

        let parts: Vec<&str> = schema.split(SEPARATOR).collect();
        let id: AlgorithmId = parts[0].parse()?;
        let algorithm = Algorithm::from_params(id, &parts[1..])?;

        Ok(Self {
            parts: parts.into_iter().map(str::to_owned).collect(),
            algorithm,
        })
    }

    /// Returns the raw schema elements, identifier first.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn id(&self) -> AlgorithmId {
        self.algorithm.id()
    }

    /// Serializes the schema back to its `/`-joined form.
    pub fn serialize(&self) -> String {
        self.parts.join("/")
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            parts: DEFAULT_SCHEMA.split(SEPARATOR).map(str::to_owned).collect(),
            algorithm: Algorithm::Pbkdf2(Default::default()),
        }
    }
}

impl FromStr for Schema {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        Schema::parse(s)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
