//! Validation rules for the account forms.
//!
//! Field validators look at one value at a time; the cross-field validator compares
//! the password with its confirmation and only applies to the signup form.

pub mod cross_field;
pub mod field;

pub use cross_field::passwords_matching;
pub use field::email_valid;
pub use field::login_valid;
pub use field::name_valid;
pub use field::password_valid;
pub use field::validate_email;
pub use field::validate_login;
pub use field::validate_name;
pub use field::validate_password;
