//! Shared types and models for the Farm Advisory Platform
//!
//! This crate contains types shared between the backend services, external
//! API clients, and the HTTP layer.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
