pub mod account;
pub mod recipe;
pub mod session;

pub use account::Credentials;
pub use account::SignupRequest;
pub use account::UserAccount;
pub use recipe::Recipe;
pub use recipe::RecipeList;
pub use session::Session;
