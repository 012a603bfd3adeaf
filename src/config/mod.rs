pub mod api;
pub mod form;
pub mod log;
pub mod session;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub use api::ApiConfig;
pub use form::FormConfig;
pub use form::LoginRedirect;
pub use log::LoggingConfig;
pub use session::SessionConfig;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub form: FormConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_str = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    config.api.base_url()?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("config_file_missing::{}::using_defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://recipes.example.com"

[form]
login_redirect = "return_url"
"#
        )
        .unwrap();

        let config = tokio_test::assert_ok!(load_config(file.path()));
        assert_eq!(config.api.base_url, "https://recipes.example.com");
        assert_eq!(config.api.recipes_path, "/api/recipes");
        assert_eq!(config.form.login_redirect, LoginRedirect::ReturnUrl);
        assert!(config.form.prefill.is_none());
        assert_eq!(config.logging.directory.as_deref(), Some(".logs"));
    }

    #[test]
    fn missing_file_is_default() {
        let config = tokio_test::assert_ok!(load_config_or_default("does/not/exist/Config.toml"));
        assert_eq!(config.form.login_redirect, LoginRedirect::Stay);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"not a url\"").unwrap();
        let err = tokio_test::assert_err!(load_config(file.path()));
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
