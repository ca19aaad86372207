use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::claims::{Claims, IssueType};
use crate::config::{ApiSecret, ClientConfig};
use crate::error::{AuthError, AuthResult};

/// Signs short-lived HS256 tokens for REST API calls.
///
/// Stateless apart from the credentials; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    api_key: String,
    api_secret: ApiSecret,
}

impl TokenIssuer {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: ApiSecret::new(api_secret),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_key: config.api_key().to_string(),
            api_secret: config.api_secret().clone(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn issue_token(&self, issue_type: IssueType) -> AuthResult<String> {
        self.issue_token_at(issue_type, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`.
    ///
    /// An empty API secret is refused with [`AuthError::Signing`] rather than producing
    /// a token keyed by an empty HMAC key. An `issued_at` whose expiry cannot be
    /// represented fails with [`AuthError::IssueTimeOutOfRange`].
    pub fn issue_token_at(
        &self,
        issue_type: IssueType,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<String> {
        if self.api_secret.is_empty() {
            return Err(AuthError::Signing("API secret is empty".to_string()));
        }

        let claims = Claims::new(self.api_key.as_str(), issue_type, issued_at)?;
        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(self.api_secret.as_bytes());

        let token = encode(&header, &claims, &key)?;
        debug!(
            issue_type = %issue_type,
            jti = %claims.token_id,
            exp = claims.expires_at,
            "issued REST API token"
        );
        Ok(token)
    }

    pub fn project_token(&self) -> AuthResult<String> {
        self.issue_token(IssueType::Project)
    }

    pub fn account_token(&self) -> AuthResult<String> {
        self.issue_token(IssueType::Account)
    }
}
