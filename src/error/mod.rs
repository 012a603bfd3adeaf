pub mod api;
pub mod config;
pub mod form;
pub mod session;

pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use api::ApiError;
pub use config::ConfigError;
pub use form::FieldError;
pub use form::FormError;
pub use session::SessionError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        $crate::error::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}
