//! Credential hashing and token round-trips across crate boundaries

use uuid::Uuid;

use hawker_auth::{issue_token, AuthConfig, AuthRole};
use hawker_common::{hash_password, verify_password};

fn config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        issuer: None,
        audience: None,
    }
}

#[test]
fn test_register_style_hash_verifies_at_login() {
    // The register handler hashes; the login handler verifies
    let stored = hash_password("correct horse battery staple").unwrap();

    assert!(verify_password("correct horse battery staple", &stored));
    assert!(!verify_password("correct horse battery", &stored));
}

#[test]
fn test_issued_token_is_well_formed() {
    let token = issue_token(Uuid::new_v4(), "seller@market.test", AuthRole::Seller, &config())
        .unwrap();

    // header.payload.signature
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_tokens_for_different_users_differ() {
    let cfg = config();
    let a = issue_token(Uuid::new_v4(), "a@market.test", AuthRole::Buyer, &cfg).unwrap();
    let b = issue_token(Uuid::new_v4(), "b@market.test", AuthRole::Buyer, &cfg).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_role_serialization_matches_api_contract() {
    assert_eq!(serde_json::to_string(&AuthRole::Buyer).unwrap(), "\"buyer\"");
    assert_eq!(
        serde_json::to_string(&AuthRole::Seller).unwrap(),
        "\"seller\""
    );
}
