//! Listings domain: seller-authored events and products with image assets

pub mod api;
pub mod domain;
pub mod repository;
pub mod workflow;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Listing, ListingDraft, ListingKind, ListingPatch};
pub use domain::state::{SessionEvent, SessionState, SessionStateMachine, StateError};

// Re-export repository types
pub use repository::{ListingFilter, ListingRepository, MemoryListingRepository, PgListingRepository};

// Re-export workflow types
pub use workflow::{EditorSession, ImageUpload, ListingWorkflow};

// Re-export API types
pub use api::routes;
pub use api::ListingsState;
