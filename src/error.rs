use thiserror::Error;

/// Errors produced while creating or verifying an encoded hash.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("unknown hash schema '{0}'")]
    UnknownSchema(String),

    #[error("malformed hash: {0}")]
    MalformedHash(String),

    #[error("missing or non-numeric parameter '{parameter}' for {algorithm}")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    #[error("invalid parameter '{parameter}' for {algorithm}: {reason}")]
    InvalidParameter {
        algorithm: &'static str,
        parameter: &'static str,
        reason: &'static str,
    },

    #[error("unsupported PBKDF2 digest '{0}'")]
    UnsupportedDigest(String),

    #[error("OS random generator unavailable")]
    Random,

    #[error("key derivation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HashError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        HashError::MalformedHash(reason.into())
    }
}

pub type Result<T, E = HashError> = std::result::Result<T, E>;
