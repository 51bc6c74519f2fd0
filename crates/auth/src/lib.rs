//! Authentication middleware for the Hawker API
//!
//! Provides JWT issuing/validation and axum extractors that work with any
//! domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::AccessClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AuthUser, SellerUser};
pub use jwt::issue_token;
pub use types::{AuthIdentity, AuthRole};
