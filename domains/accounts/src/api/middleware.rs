//! Accounts domain state and auth backend integration

use axum::extract::FromRef;

use hawker_auth::AuthBackend;

use crate::repository::UserRepository;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: UserRepository,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
