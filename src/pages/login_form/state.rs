use crate::error::FieldError;
use crate::error::FormError;
use crate::model::Credentials;
use crate::model::SignupRequest;
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub login: String,
    pub password: String,
}

impl LoginFields {
    pub fn login_error(&self) -> Option<FieldError> {
        validation::validate_login(&self.login).err()
    }

    pub fn password_error(&self) -> Option<FieldError> {
        validation::validate_password(&self.password).err()
    }

    pub fn errors(&self) -> Vec<FormError> {
        field_errors([("login", self.login_error()), ("password", self.password_error())])
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.login.clone(), self.password.clone())
    }
}

impl From<Credentials> for LoginFields {
    fn from(credentials: Credentials) -> Self {
        Self {
            login: credentials.login,
            password: credentials.password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub login: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SignupFields {
    pub fn login_error(&self) -> Option<FieldError> {
        validation::validate_login(&self.login).err()
    }

    pub fn password_error(&self) -> Option<FieldError> {
        validation::validate_password(&self.password).err()
    }

    pub fn password_confirm_error(&self) -> Option<FieldError> {
        validation::validate_password(&self.password_confirm).err()
    }

    pub fn first_name_error(&self) -> Option<FieldError> {
        validation::validate_name(&self.first_name).err()
    }

    pub fn last_name_error(&self) -> Option<FieldError> {
        validation::validate_name(&self.last_name).err()
    }

    pub fn email_error(&self) -> Option<FieldError> {
        validation::validate_email(&self.email).err()
    }

    /// Field errors first, then the password/confirmation mismatch if any.
    pub fn errors(&self) -> Vec<FormError> {
        let mut errors = field_errors([
            ("login", self.login_error()),
            ("email", self.email_error()),
            ("password", self.password_error()),
            ("passwordConfirm", self.password_confirm_error()),
            ("firstName", self.first_name_error()),
            ("lastName", self.last_name_error()),
        ]);
        if let Err(mismatch) = validation::passwords_matching(&self.password, &self.password_confirm) {
            errors.push(mismatch);
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            login: self.login.clone(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

fn field_errors<const N: usize>(fields: [(&'static str, Option<FieldError>); N]) -> Vec<FormError> {
    fields
        .into_iter()
        .filter_map(|(field, error)| error.map(|error| FormError::Field { field, error }))
        .collect()
}

/// The active field set. Its variant is the form mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    Login(LoginFields),
    Signup(SignupFields),
}

impl FormFields {
    pub fn mode(&self) -> FormMode {
        match self {
            FormFields::Login(_) => FormMode::Login,
            FormFields::Signup(_) => FormMode::Signup,
        }
    }

    pub fn login(&self) -> &str {
        match self {
            FormFields::Login(fields) => &fields.login,
            FormFields::Signup(fields) => &fields.login,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            FormFields::Login(fields) => &fields.password,
            FormFields::Signup(fields) => &fields.password,
        }
    }

    pub fn errors(&self) -> Vec<FormError> {
        match self {
            FormFields::Login(fields) => fields.errors(),
            FormFields::Signup(fields) => fields.errors(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Everything the form shows. A mode switch replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub submitted: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every mode switch so late results of an earlier form are recognised.
    pub generation: u64,
}

impl FormState {
    pub fn new(fields: FormFields, generation: u64) -> Self {
        Self {
            fields,
            submitted: false,
            loading: false,
            error: None,
            generation,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.fields.mode()
    }
}
