use thiserror::Error;

/// Why a single field value was rejected. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("contains characters that are not allowed")]
    Pattern,
    #[error("is not a valid email address")]
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field}: {error}")]
    Field { field: &'static str, error: FieldError },
    #[error("passwords do not match")]
    PasswordMismatch,
}
