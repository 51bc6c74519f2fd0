//! Authorization context for authenticated users

use crate::types::{AuthIdentity, AuthRole};

/// Represents an authenticated user context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// Check if the user may manage listings
    pub fn is_seller(&self) -> bool {
        self.user.role == AuthRole::Seller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn identity(role: AuthRole) -> AuthIdentity {
        AuthIdentity {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_seller() {
        assert!(AuthContext::new(identity(AuthRole::Seller)).is_seller());
        assert!(!AuthContext::new(identity(AuthRole::Buyer)).is_seller());
    }
}
