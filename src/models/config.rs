//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::query::state::DEFAULT_ITEMS_PER_PAGE;
use crate::services::{ServiceError, ServiceResult};

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the services and the command line front-end.
pub struct AppConfig {
    /// Page size of the lead list.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Lead file read when none is given on the command line.
    pub leads_path: String,
}

impl AppConfig {
    pub fn new(leads_path: impl Into<String>) -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            leads_path: leads_path.into(),
        }
    }

    /// Rejects settings the lead list cannot work with.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.items_per_page == 0 {
            return Err(ServiceError::Config(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
