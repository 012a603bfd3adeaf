//! The login/signup form.
//!
//! One component serves both purposes. [`LoginForm::use_login_form`] and
//! [`LoginForm::use_signup_form`] swap the whole [`FormState`], which decides the
//! fields and validators in force. [`LoginForm::submit`] validates, then calls the
//! identity service for the active mode and reports the outcome back into the state.
//!
//! Submitting while a call is in flight is refused with [`SubmitOutcome::Busy`].
//! A result that arrives after the user switched mode is dropped.

pub mod state;

use std::sync::Arc;

use futures_signals::signal::Mutable;
use futures_signals::signal::MutableSignalCloned;
use futures_signals::signal::Signal;
use tracing::debug;
use tracing::info;
use tracing::warn;
use url::Url;

pub use state::FormFields;
pub use state::FormMode;
pub use state::FormState;
pub use state::LoginFields;
pub use state::SignupFields;

use crate::config::FormConfig;
use crate::config::LoginRedirect;
use crate::error::FormError;
use crate::model::Credentials;
use crate::model::Session;
use crate::model::UserAccount;
use crate::service::IdentityService;
use crate::validation;

const DEFAULT_RETURN_URL: &str = "/";
const RETURN_URL_PARAM: &str = "returnUrl";

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent; the active fields failed validation.
    Invalid(Vec<FormError>),
    /// A previous submit is still loading.
    Busy,
    LoggedIn(Session),
    SignedUp(UserAccount),
    /// The service refused; the message is also in the form's `error`.
    Failed(String),
    /// The mode changed while the call was in flight, so its result was not applied.
    Discarded,
}

/// Login/signup form state and submission.
///
/// The post-signup login runs on the current tokio runtime. On any other executor the
/// signup still completes, but that login is not issued.
pub struct LoginForm {
    identity: Arc<dyn IdentityService>,
    config: FormConfig,
    return_url: String,
    state: Mutable<FormState>,
    user_created: Mutable<bool>,
    redirect: Mutable<Option<String>>,
}

impl LoginForm {
    /// Creates the form in login mode.
    pub fn new(identity: Arc<dyn IdentityService>, config: FormConfig) -> Arc<Self> {
        Self::build(identity, config, DEFAULT_RETURN_URL.to_string())
    }

    /// Like [`LoginForm::new`], taking the return URL from the `returnUrl` query
    /// parameter of the page the form lives on.
    pub fn with_page_url(identity: Arc<dyn IdentityService>, config: FormConfig, page_url: &str) -> Arc<Self> {
        Self::build(identity, config, return_url_from(page_url))
    }

    fn build(identity: Arc<dyn IdentityService>, config: FormConfig, return_url: String) -> Arc<Self> {
        let fields = FormFields::Login(login_fields(&config));
        Arc::new(Self {
            identity,
            config,
            return_url,
            state: Mutable::new(FormState::new(fields, 0)),
            user_created: Mutable::new(false),
            redirect: Mutable::new(None),
        })
    }

    pub fn use_login_form(&self) {
        self.replace_fields(FormFields::Login(login_fields(&self.config)));
    }

    pub fn use_signup_form(&self) {
        self.replace_fields(FormFields::Signup(SignupFields::default()));
    }

    fn replace_fields(&self, fields: FormFields) {
        let mode = fields.mode();
        let mut state = self.state.lock_mut();
        let generation = state.generation + 1;
        *state = FormState::new(fields, generation);
        debug!("form_mode::{:?}::generation::{}", mode, generation);
    }

    /// Validates and sends the form. Never returns an error: remote failures land
    /// in the form's `error` and in [`SubmitOutcome::Failed`].
    pub async fn submit(&self) -> SubmitOutcome {
        let (fields, generation) = {
            let mut state = self.state.lock_mut();
            state.submitted = true;

            let errors = state.fields.errors();
            if !errors.is_empty() {
                debug!("submit_rejected::{} invalid fields", errors.len());
                return SubmitOutcome::Invalid(errors);
            }
            if state.loading {
                debug!("submit_ignored::request_in_flight");
                return SubmitOutcome::Busy;
            }

            state.loading = true;
            (state.fields.clone(), state.generation)
        };

        match fields {
            FormFields::Login(fields) => self.submit_login(fields, generation).await,
            FormFields::Signup(fields) => self.submit_signup(fields, generation).await,
        }
    }

    async fn submit_login(&self, fields: LoginFields, generation: u64) -> SubmitOutcome {
        let result = self.identity.login(&fields.login, &fields.password, true).await;
        if !self.finish(generation, result.as_ref().err().map(ToString::to_string)) {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(session) => {
                info!("login_succeeded::{}", session.login);
                if self.config.login_redirect == LoginRedirect::ReturnUrl {
                    self.redirect.set(Some(self.return_url.clone()));
                }
                SubmitOutcome::LoggedIn(session)
            },
            Err(e) => {
                warn!("login_failed::{}::{}", fields.login, e);
                SubmitOutcome::Failed(e.to_string())
            },
        }
    }

    async fn submit_signup(&self, fields: SignupFields, generation: u64) -> SubmitOutcome {
        let request = fields.to_request();
        let result = self.identity.signup(request.clone()).await;
        if !self.finish(generation, result.as_ref().err().map(ToString::to_string)) {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(account) => {
                info!("signup_succeeded::{}", account.login);
                self.user_created.set(true);
                self.spawn_background_login(request.credentials());
                self.use_login_form();
                SubmitOutcome::SignedUp(account)
            },
            Err(e) => {
                warn!("signup_failed::{}::{}", fields.login, e);
                SubmitOutcome::Failed(e.to_string())
            },
        }
    }

    /// Clears `loading` and stores `error`, unless the form was rebuilt meanwhile.
    fn finish(&self, generation: u64, error: Option<String>) -> bool {
        let mut state = self.state.lock_mut();
        if state.generation != generation {
            debug!("stale_result_discarded::generation::{}::current::{}", generation, state.generation);
            return false;
        }
        state.error = error;
        state.loading = false;
        true
    }

    /// Logs the new account in without remembering it. Nobody waits for this task;
    /// its outcome only reaches the logs. Skipped outside a tokio runtime.
    fn spawn_background_login(&self, credentials: Credentials) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("background_login_skipped::{}::no_tokio_runtime", credentials.login);
            return;
        };
        let identity = Arc::clone(&self.identity);
        runtime.spawn(async move {
            match identity.login(&credentials.login, &credentials.password, false).await {
                Ok(session) => info!("background_login_succeeded::{}", session.login),
                Err(e) => warn!("background_login_failed::{}::{}", credentials.login, e),
            }
        });
    }

    // ---- field input ----

    pub fn set_login(&self, value: impl Into<String>) {
        let value = value.into();
        match &mut self.state.lock_mut().fields {
            FormFields::Login(fields) => fields.login = value,
            FormFields::Signup(fields) => fields.login = value,
        }
    }

    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        match &mut self.state.lock_mut().fields {
            FormFields::Login(fields) => fields.password = value,
            FormFields::Signup(fields) => fields.password = value,
        }
    }

    /// Edits the signup fields. Returns `false` (and does nothing) in login mode.
    pub fn update_signup_fields(&self, update: impl FnOnce(&mut SignupFields)) -> bool {
        match &mut self.state.lock_mut().fields {
            FormFields::Signup(fields) => {
                update(fields);
                true
            },
            FormFields::Login(_) => false,
        }
    }

    // ---- per-field validity ----

    pub fn login_valid(&self) -> bool {
        validation::login_valid(self.state.lock_ref().fields.login())
    }

    pub fn password_valid(&self) -> bool {
        validation::password_valid(self.state.lock_ref().fields.password())
    }

    pub fn password_confirm_valid(&self) -> bool {
        self.signup_field_valid(|fields| fields.password_confirm_error().is_none())
    }

    pub fn first_name_valid(&self) -> bool {
        self.signup_field_valid(|fields| fields.first_name_error().is_none())
    }

    pub fn last_name_valid(&self) -> bool {
        self.signup_field_valid(|fields| fields.last_name_error().is_none())
    }

    pub fn email_valid(&self) -> bool {
        self.signup_field_valid(|fields| fields.email_error().is_none())
    }

    // signup-only fields do not exist in login mode
    fn signup_field_valid(&self, check: impl FnOnce(&SignupFields) -> bool) -> bool {
        match &self.state.lock_ref().fields {
            FormFields::Signup(fields) => check(fields),
            FormFields::Login(_) => false,
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.state.lock_ref().fields.is_valid()
    }

    pub fn errors(&self) -> Vec<FormError> {
        self.state.lock_ref().fields.errors()
    }

    // ---- state ----

    pub fn mode(&self) -> FormMode {
        self.state.lock_ref().mode()
    }

    pub fn is_signing_up(&self) -> bool {
        self.mode() == FormMode::Signup
    }

    pub fn submitted(&self) -> bool {
        self.state.lock_ref().submitted
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock_ref().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock_ref().error.clone()
    }

    pub fn user_created(&self) -> bool {
        self.user_created.get()
    }

    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    /// Where the host should navigate, once a login asks for it.
    pub fn redirect(&self) -> Option<String> {
        self.redirect.get_cloned()
    }

    pub fn state(&self) -> FormState {
        self.state.get_cloned()
    }

    pub fn state_signal(&self) -> MutableSignalCloned<FormState> {
        self.state.signal_cloned()
    }

    /// Re-evaluated on every field change, including the password/confirmation pair.
    pub fn form_valid_signal(&self) -> impl Signal<Item = bool> {
        self.state.signal_ref(|state| state.fields.is_valid())
    }

    pub fn redirect_signal(&self) -> MutableSignalCloned<Option<String>> {
        self.redirect.signal_cloned()
    }
}

// Prefill is a development aid; production builds never auto-fill credentials.
fn login_fields(config: &FormConfig) -> LoginFields {
    match &config.prefill {
        Some(credentials) if !cfg!(feature = "prod") => LoginFields::from(credentials.clone()),
        Some(_) => {
            debug!("login_prefill_ignored::prod_build");
            LoginFields::default()
        },
        None => LoginFields::default(),
    }
}

fn return_url_from(page_url: &str) -> String {
    let parsed = Url::parse(page_url).or_else(|_| Url::parse("http://localhost").and_then(|base| base.join(page_url)));
    parsed
        .ok()
        .and_then(|url| url.query_pairs().find(|(key, _)| key == RETURN_URL_PARAM).map(|(_, value)| value.into_owned()))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_RETURN_URL.to_string())
}
