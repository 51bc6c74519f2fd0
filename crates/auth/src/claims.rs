//! JWT claims

use serde::{Deserialize, Serialize};

use crate::types::AuthRole;

/// Claims carried by a Hawker access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id (UUID as string)
    pub sub: String,
    pub email: String,
    pub role: AuthRole,
    pub iat: u64,
    pub exp: u64,
}
