use crate::domain::lead::Lead;
use crate::repository::errors::RepositoryResult;
use crate::repository::{LeadReader, ensure_unique_ids};

/// Lead source backed by a vector already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    leads: Vec<Lead>,
}

impl InMemoryLeadRepository {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }
}

impl LeadReader for InMemoryLeadRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        ensure_unique_ids(&self.leads)?;
        Ok(self.leads.clone())
    }
}
