use reqwest::StatusCode;

use crate::error::ApiError;
use crate::model::Session;
use crate::model::UserAccount;
use crate::pages::login_form::SignupFields;

pub fn session_for(login: &str) -> Session {
    Session {
        token: format!("token-{login}"),
        login: login.to_string(),
        expires_at: None,
    }
}

pub fn account_for(login: &str) -> UserAccount {
    UserAccount {
        id: Some(7),
        login: login.to_string(),
        first_name: Some("Anne".to_string()),
        last_name: Some("O'Neil".to_string()),
        email: Some("anne@example.com".to_string()),
    }
}

pub fn valid_signup_fields() -> SignupFields {
    SignupFields {
        login: "chef42".to_string(),
        password: "secret".to_string(),
        password_confirm: "secret".to_string(),
        first_name: "Anne".to_string(),
        last_name: "O'Neil".to_string(),
        email: "anne@example.com".to_string(),
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: StatusCode::BAD_REQUEST,
        message: message.to_string(),
    }
}
