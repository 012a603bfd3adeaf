pub mod client;
pub mod identity;
pub mod interceptor;
pub mod recipe;
pub mod reload;
pub mod session;

pub use client::ApiClient;
pub use identity::HttpIdentityService;
pub use identity::IdentityService;
pub use interceptor::ErrorInterceptor;
pub use recipe::RecipeService;
pub use reload::ReloadSignal;
pub use session::SessionStore;
