//! HTTP handlers for the Farm Advisory Platform

pub mod advisory;
pub mod context;
pub mod health;
pub mod profile;

pub use advisory::*;
pub use context::*;
pub use health::*;
pub use profile::*;
