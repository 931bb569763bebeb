pub mod config;
pub mod login;
pub mod token;

pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use token::{Claims, IssuedToken, TokenService};
