#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("missing configuration `{0}`")]
    MissingConfig(String),
    #[error("invalid configuration `{key}`: {msg}")]
    InvalidConfig { key: String, msg: String },
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("invalid row :: {0}")]
    InvalidRow(String),
    #[error("store error :: {0}")]
    Store(#[from] surrealdb::Error),
    #[error("store rejected the request :: {0}")]
    Rejected(String),
    #[error("unexpected row shape :: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of an [`ApiError`], for callers that need more than
/// "did it fail".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Precondition,
    Remote,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingConfig(_) | ApiError::InvalidConfig { .. } => ErrorKind::Config,
            ApiError::InvalidIdentifier(_) | ApiError::InvalidRow(_) => ErrorKind::Precondition,
            ApiError::Store(_) | ApiError::Rejected(_) | ApiError::Decode(_) => ErrorKind::Remote,
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
