use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::fixtures::account_for;
use super::fixtures::session_for;
use crate::error::ApiError;
use crate::model::Session;
use crate::model::SignupRequest;
use crate::model::UserAccount;
use crate::service::IdentityService;

/// Identity service whose calls block until [`GatedIdentity::open`] is called.
#[derive(Default)]
pub struct GatedIdentity {
    gate: Notify,
    entered: Notify,
    pub login_calls: AtomicUsize,
    pub signup_calls: AtomicUsize,
}

impl GatedIdentity {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Lets one blocked call through.
    pub fn open(&self) {
        self.gate.notify_one();
    }

    /// Waits until a call has reached the gate.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }
}

#[async_trait]
impl IdentityService for GatedIdentity {
    async fn login(&self, login: &str, _password: &str, _remember: bool) -> Result<Session, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(session_for(login))
    }

    async fn signup(&self, request: SignupRequest) -> Result<UserAccount, ApiError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(account_for(&request.login))
    }

    fn logout(&self) {}
}
