//! Domain entities and value objects for lead management.

pub mod lead;
pub mod types;
