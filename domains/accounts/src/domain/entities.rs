//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use hawker_auth::AuthRole;

/// A registered user.
///
/// `password_hash` is the salted digest from `hawker_common::hash_password`;
/// the plaintext never leaves the register/login handlers.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user from registration input and a precomputed hash
    pub fn new(email: String, name: String, password_hash: String, role: AuthRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_fields() {
        let user = User::new(
            "buyer@test.com".to_string(),
            "Ada".to_string(),
            "salt:hash".to_string(),
            AuthRole::Buyer,
        );
        assert_eq!(user.email, "buyer@test.com");
        assert_eq!(user.role, AuthRole::Buyer);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "a@b.com".to_string(),
            "A".to_string(),
            "salt:hash".to_string(),
            AuthRole::Seller,
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("salt:hash"));
        assert!(!json.contains("password_hash"));
    }
}
