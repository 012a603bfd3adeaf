pub mod login_form;

pub use login_form::LoginForm;
pub use login_form::SubmitOutcome;
