use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::claims::IssueType;
use crate::config::ClientConfig;
use crate::error::{AuthError, AuthResult};
use crate::issuer::TokenIssuer;
use crate::transport::HttpSend;

/// Header carrying the signed token on REST calls (`X-OPENTOK-AUTH`).
pub const AUTH_HEADER: &str = "x-opentok-auth";

const USER_AGENT_VALUE: &str = concat!("opentok-auth-rs/", env!("CARGO_PKG_VERSION"));

/// Authenticated access to the REST API host.
///
/// Configuration is fixed at construction; `with_*` methods return a new client
/// and leave the receiver untouched, so a client can be shared freely.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    issuer: TokenIssuer,
    transport: Arc<dyn HttpSend>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key, api_secret))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            issuer: TokenIssuer::from_config(&config),
            config,
            transport: Arc::new(Client::new()),
        }
    }

    pub fn builder(api_key: impl Into<String>, api_secret: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder::new(ClientConfig::new(api_key, api_secret))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }

    pub fn api_host(&self) -> &str {
        self.config.api_host()
    }

    /// Client targeting `url`; fails with [`AuthError::EmptyApiHost`] on an empty string.
    pub fn with_api_host(&self, url: impl Into<String>) -> AuthResult<Self> {
        let config = self.config.with_api_host(url)?;
        Ok(Self {
            config,
            issuer: self.issuer.clone(),
            transport: Arc::clone(&self.transport),
        })
    }

    /// Client using `client` as transport. `None` keeps the current transport.
    pub fn with_http_client(&self, client: Option<Arc<dyn HttpSend>>) -> Self {
        Self {
            config: self.config.clone(),
            issuer: self.issuer.clone(),
            transport: client.unwrap_or_else(|| Arc::clone(&self.transport)),
        }
    }

    pub fn request_url(&self, path: &str) -> AuthResult<Url> {
        let host = self.config.api_host();
        let host = host.strip_suffix('/').unwrap_or(host);
        let raw = format!("{host}{path}");
        Url::parse(&raw).map_err(|err| AuthError::InvalidRequestUrl(raw, err.to_string()))
    }

    /// Send one request to `path` on the configured host, authorized with a fresh
    /// token of `issue_type`. Non-2xx responses are returned as errors.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        issue_type: IssueType,
        body: Option<&Value>,
    ) -> AuthResult<Response> {
        let request = self.build_request(method, path, issue_type, body)?;
        let url = request.url().to_string();
        debug!(method = %request.method(), %url, %issue_type, "dispatching REST API request");

        let response = self.transport.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "REST API request rejected");
            return Err(AuthError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response)
    }

    pub async fn get(&self, path: &str) -> AuthResult<Response> {
        self.send(Method::GET, path, IssueType::Project, None).await
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        issue_type: IssueType,
        body: Option<&Value>,
    ) -> AuthResult<Request> {
        let url = self.request_url(path)?;
        let token = self.issuer.issue_token(issue_type)?;
        let token_value = HeaderValue::from_str(&token)
            .map_err(|err| AuthError::Signing(err.to_string()))?;

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(AUTH_HEADER, token_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.to_string().into());
        }

        Ok(request)
    }
}

pub struct ApiClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpSend>>,
}

impl ApiClientBuilder {
    fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    pub fn with_api_host(mut self, url: impl Into<String>) -> AuthResult<Self> {
        self.config = self.config.with_api_host(url)?;
        Ok(self)
    }

    pub fn with_http_client(mut self, client: Option<Arc<dyn HttpSend>>) -> Self {
        if client.is_some() {
            self.transport = client;
        }
        self
    }

    pub fn build(self) -> ApiClient {
        let client = ApiClient::from_config(self.config);
        match self.transport {
            Some(transport) => ApiClient {
                transport,
                ..client
            },
            None => client,
        }
    }
}
