//! Record manifest generation for the external orchestrator

pub mod generator;
pub mod types;

pub use generator::evaluate;
pub use types::{ArgumentRecord, LaunchRecord, NodeRecord};
