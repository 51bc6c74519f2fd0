//! API handlers for the Orders domain

pub mod orders;
