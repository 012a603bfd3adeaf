use async_trait::async_trait;
use mockall::mock;

use crate::error::ApiError;
use crate::model::Session;
use crate::model::SignupRequest;
use crate::model::UserAccount;
use crate::service::IdentityService;

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityService for Identity {
        async fn login(&self, login: &str, password: &str, remember: bool) -> Result<Session, ApiError>;
        async fn signup(&self, request: SignupRequest) -> Result<UserAccount, ApiError>;
        fn logout(&self);
    }
}
