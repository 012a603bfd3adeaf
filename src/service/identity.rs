use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use super::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::Session;
use crate::model::SignupRequest;
use crate::model::UserAccount;

#[async_trait]
pub trait IdentityService: Send + Sync {
    /// `remember` keeps the session across runs.
    async fn login(&self, login: &str, password: &str, remember: bool) -> Result<Session, ApiError>;
    async fn signup(&self, request: SignupRequest) -> Result<UserAccount, ApiError>;
    fn logout(&self);
}

#[derive(Serialize)]
struct LoginBody<'a> {
    login: &'a str,
    password: &'a str,
}

pub struct HttpIdentityService {
    client: ApiClient,
    login_path: String,
    signup_path: String,
}

impl HttpIdentityService {
    pub fn new(client: ApiClient, config: &ApiConfig) -> Self {
        Self {
            client,
            login_path: config.login_path.clone(),
            signup_path: config.signup_path.clone(),
        }
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    async fn login(&self, login: &str, password: &str, remember: bool) -> Result<Session, ApiError> {
        let request = self.client.request(Method::POST, &self.login_path).json(&LoginBody { login, password });
        let session: Session = self.client.send_json(request).await?;

        if let Err(e) = self.client.session().store(&session, remember) {
            // the session is still usable in memory
            warn!("failed_to_persist_session::{}::{}", session.login, e);
        }
        debug!("logged_in::{}::remember::{}", session.login, remember);
        Ok(session)
    }

    async fn signup(&self, request: SignupRequest) -> Result<UserAccount, ApiError> {
        let builder = self.client.request(Method::POST, &self.signup_path).json(&request);
        let account: UserAccount = self.client.send_json(builder).await?;
        debug!("account_created::{}", account.login);
        Ok(account)
    }

    fn logout(&self) {
        debug!("logged_out");
        self.client.session().clear();
    }
}
