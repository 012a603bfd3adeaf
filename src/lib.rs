pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod service;
pub mod tracing;
pub mod validation;

pub use error::Result;
pub use error::{ApiError, ConfigError, FieldError, FormError, SessionError};

// Test utilities - only compiled during testing
#[cfg(test)]
pub mod test_utils;
