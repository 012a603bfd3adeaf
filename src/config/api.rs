use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub signup_path: String,
    pub recipes_path: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            login_path: "/api/auth/login".to_string(),
            signup_path: "/api/users".to_string(),
            recipes_path: "/api/recipes".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|reason| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
