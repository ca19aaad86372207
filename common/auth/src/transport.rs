use async_trait::async_trait;
use reqwest::{Client, Request, Response};

use crate::error::{AuthError, AuthResult};

/// Sends one HTTP request and yields one response or an error.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn send(&self, request: Request) -> AuthResult<Response>;
}

#[async_trait]
impl HttpSend for Client {
    async fn send(&self, request: Request) -> AuthResult<Response> {
        let url = request.url().to_string();
        self.execute(request)
            .await
            .map_err(|err| AuthError::Transport {
                url,
                message: err.to_string(),
            })
    }
}
