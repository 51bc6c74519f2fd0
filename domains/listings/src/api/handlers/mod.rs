//! API handlers for the Listings domain

pub mod listings;
