use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Lifetime of every issued token. The REST API rejects windows longer than five minutes.
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// Authorization scope requested by a token (`ist` claim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    /// Most REST calls (sessions, archives, broadcasts).
    Project,
    /// Account management calls.
    Account,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Project => "project",
            IssueType::Account => "account",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "project" => Ok(IssueType::Project),
            "account" => Ok(IssueType::Account),
            other => Err(AuthError::UnknownIssueType(other.to_string())),
        }
    }
}

/// Payload of a REST API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(rename = "jti")]
    pub token_id: String,
    #[serde(rename = "ist")]
    pub issue_type: IssueType,
}

impl Claims {
    /// Build claims for `issuer` valid for [`TOKEN_TTL_SECONDS`] from `issued_at`,
    /// with a fresh random token id.
    ///
    /// Fails with [`AuthError::IssueTimeOutOfRange`] when the expiry is not representable.
    pub fn new(
        issuer: impl Into<String>,
        issue_type: IssueType,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<Self> {
        let expires_at = issued_at
            .checked_add_signed(Duration::seconds(TOKEN_TTL_SECONDS))
            .ok_or_else(|| AuthError::IssueTimeOutOfRange(issued_at.to_rfc3339()))?;

        Ok(Self {
            issuer: issuer.into(),
            issued_at: issued_at.timestamp(),
            expires_at: expires_at.timestamp(),
            token_id: Uuid::new_v4().to_string(),
            issue_type,
        })
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.expires_at - self.issued_at
    }
}
