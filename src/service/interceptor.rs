use reqwest::Response;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

use super::reload::ReloadSignal;
use super::session::SessionStore;
use crate::error::ApiError;

/// Post-processes every backend response.
///
/// A 401 from any request logs the user out and asks the host to reload, whichever
/// call triggered it. Other failures are turned into the server's `message`, or the
/// HTTP status text when the body carries none.
#[derive(Debug, Clone)]
pub struct ErrorInterceptor {
    session: SessionStore,
    reload: ReloadSignal,
}

impl ErrorInterceptor {
    pub fn new(session: SessionStore, reload: ReloadSignal) -> Self {
        Self { session, reload }
    }

    pub async fn intercept(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let status_text = status.canonical_reason().unwrap_or("Unknown Error").to_string();
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body).unwrap_or(status_text);

        if status == StatusCode::UNAUTHORIZED {
            warn!("unauthorized::{}::logging_out", url.path());
            self.session.clear();
            self.reload.reload();
            return Err(ApiError::Unauthorized { message });
        }

        warn!("request_failed::{}::{}::{}", url.path(), status.as_u16(), message);
        Err(ApiError::Server { status, message })
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
