pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod issuer;
pub mod transport;

pub use claims::{Claims, IssueType, TOKEN_TTL_SECONDS};
pub use client::{ApiClient, ApiClientBuilder, AUTH_HEADER};
pub use config::{ApiSecret, ClientConfig, DEFAULT_API_HOST};
pub use error::{AuthError, AuthResult};
pub use issuer::TokenIssuer;
pub use transport::HttpSend;
