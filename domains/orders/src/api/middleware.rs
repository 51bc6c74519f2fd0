//! Orders domain state and auth backend integration

use axum::extract::FromRef;

use hawker_auth::AuthBackend;

use crate::workflow::OrderWorkflow;

/// Application state for the Orders domain.
#[derive(Clone)]
pub struct OrdersState {
    pub workflow: OrderWorkflow,
    pub auth: AuthBackend,
}

impl FromRef<OrdersState> for AuthBackend {
    fn from_ref(state: &OrdersState) -> Self {
        state.auth.clone()
    }
}
