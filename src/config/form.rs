use serde::Deserialize;
use serde::Serialize;

use crate::model::Credentials;

/// What the login form does after a successful login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginRedirect {
    /// Stay on the form.
    #[default]
    Stay,
    /// Publish the `returnUrl` query parameter (or `/`) as the redirect target.
    ReturnUrl,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub login_redirect: LoginRedirect,
    /// Written into the login fields whenever the login form is built. Ignored in `prod` builds.
    pub prefill: Option<Credentials>,
}
