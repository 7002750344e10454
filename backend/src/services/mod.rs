//! Business logic services for the Farm Advisory Platform

pub mod advisory;
pub mod aggregation;
pub mod geo;
pub mod polygon;
pub mod profile;

pub use advisory::AdvisoryService;
pub use aggregation::FarmerDataService;
pub use profile::PgProfileStore;
