//! Authentication configuration

/// Configuration for JWT issuing and validation
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Expected `iss` claim; skipped when `None`
    pub issuer: Option<String>,
    /// Expected `aud` claim; skipped when `None`
    pub audience: Option<String>,
}
