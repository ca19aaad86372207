use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("API host cannot be empty")]
    EmptyApiHost,
    #[error("invalid request URL '{0}': {1}")]
    InvalidRequestUrl(String, String),
    #[error("unknown issue type '{0}'")]
    UnknownIssueType(String),
    #[error("issue time {0} leaves no room for the token lifetime")]
    IssueTimeOutOfRange(String),
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Signing(value.to_string())
    }
}
