//! Listings domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;

use hawker_auth::AuthBackend;

use crate::repository::ListingRepository;
use crate::workflow::ListingWorkflow;

/// Application state for the Listings domain
#[derive(Clone)]
pub struct ListingsState {
    pub repo: Arc<dyn ListingRepository>,
    pub workflow: ListingWorkflow,
    pub auth: AuthBackend,
}

impl FromRef<ListingsState> for AuthBackend {
    fn from_ref(state: &ListingsState) -> Self {
        state.auth.clone()
    }
}
