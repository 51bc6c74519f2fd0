//! Domain layer for the Orders domain

pub mod entities;
