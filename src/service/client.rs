use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::interceptor::ErrorInterceptor;
use super::reload::ReloadSignal;
use super::session::SessionStore;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::error::Context;
use crate::error::Result;

/// HTTP access to the backend. Adds the bearer token of the current session and runs
/// every response through the [`ErrorInterceptor`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
    interceptor: ErrorInterceptor,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore, reload: ReloadSignal) -> Result<Self> {
        let base_url = config.base_url()?;
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            interceptor: ErrorInterceptor::new(session.clone(), reload),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        self.interceptor.intercept(response).await
    }

    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
