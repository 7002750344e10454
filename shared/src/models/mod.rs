//! Domain models for the Farm Advisory Platform

mod advisory;
mod context;
mod environment;
mod field;
mod profile;

pub use advisory::*;
pub use context::*;
pub use environment::*;
pub use field::*;
pub use profile::*;
