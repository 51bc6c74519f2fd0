//! Auth read-model types
//!
//! Lightweight view of the user row owned by the accounts domain, carrying
//! only the fields needed for authentication and authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
}

/// Marketplace role for auth decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthRole {
    Buyer,
    Seller,
}

impl AuthRole {
    /// Whether this role may manage listings
    pub fn is_seller(&self) -> bool {
        matches!(self, AuthRole::Seller)
    }
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRole::Buyer => write!(f, "buyer"),
            AuthRole::Seller => write!(f, "seller"),
        }
    }
}
