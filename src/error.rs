use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no valid basic credentials")]
    NoCredentials,
    /// Carries the `WWW-Authenticate` challenge to answer with.
    #[error("unauthorized, challenge: {0}")]
    Unauthorized(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: &str) -> Self {
        Self::InvalidArgument(message.to_owned())
    }
}
