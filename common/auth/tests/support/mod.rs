#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use opentok_auth::{AuthResult, Claims, HttpSend};
use reqwest::{Request, Response};

/// Verify `token` with `secret`, ignoring expiry.
pub fn verify(token: &str, secret: &[u8]) -> jsonwebtoken::errors::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation).map(|data| data.claims)
}

/// Decode the payload segment without checking the signature.
pub fn raw_payload(token: &str) -> serde_json::Value {
    let payload = token.split('.').nth(1).expect("payload segment");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("base64url payload");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub url: String,
    pub token: Option<String>,
}

/// Transport that records each request and answers with a fixed status.
#[derive(Clone)]
pub struct CapturingTransport {
    status: u16,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CapturingTransport {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl HttpSend for CapturingTransport {
    async fn send(&self, request: Request) -> AuthResult<Response> {
        let token = request
            .headers()
            .get(opentok_auth::AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        self.captured
            .lock()
            .expect("mutex poisoned")
            .push(CapturedRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                token,
            });

        let response = http::Response::builder()
            .status(self.status)
            .body("{}")
            .expect("static response");
        Ok(Response::from(response))
    }
}
