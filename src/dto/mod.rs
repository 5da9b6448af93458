//! DTO modules that bridge services with front-ends.

pub mod leads;
