use crate::error::FormError;

/// Fails when the password and its confirmation differ.
pub fn passwords_matching(password: &str, password_confirm: &str) -> Result<(), FormError> {
    if password != password_confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}
