use std::fmt;

use zeroize::Zeroizing;

use crate::error::{AuthError, AuthResult};

/// REST API host used unless overridden.
pub const DEFAULT_API_HOST: &str = "https://api.opentok.com";

/// API secret held in memory that is wiped on drop and never printed.
#[derive(Clone)]
pub struct ApiSecret(Zeroizing<String>);

impl ApiSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(***)")
    }
}

/// Credentials and endpoint for the REST API.
///
/// Values are immutable; overriding the host yields a new config.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    api_secret: ApiSecret,
    api_host: String,
}

impl ClientConfig {
    /// Construct config pointing at [`DEFAULT_API_HOST`].
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: ApiSecret::new(api_secret),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    /// Copy of this config targeting `url`. Fails on an empty URL and leaves `self` untouched.
    pub fn with_api_host(&self, url: impl Into<String>) -> AuthResult<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(AuthError::EmptyApiHost);
        }

        Ok(Self {
            api_host: url,
            ..self.clone()
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub(crate) fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }
}
