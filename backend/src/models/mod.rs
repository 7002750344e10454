//! Backend re-exports of the shared data model

pub use shared::models::*;
pub use shared::types::*;
