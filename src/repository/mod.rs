use std::collections::HashSet;
use std::path::Path;

use crate::domain::lead::Lead;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
pub mod file;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use file::{CsvLeadRepository, JsonLeadRepository};
pub use memory::InMemoryLeadRepository;

/// Supplies the lead collection the query pipeline works on.
pub trait LeadReader {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

/// Rejects collections where two leads share an identifier.
pub fn ensure_unique_ids(leads: &[Lead]) -> RepositoryResult<()> {
    let mut seen = HashSet::with_capacity(leads.len());
    for lead in leads {
        if !seen.insert(lead.id.as_str()) {
            return Err(RepositoryError::DuplicateId(lead.id.to_string()));
        }
    }
    Ok(())
}

/// Opens a lead file, picking the reader from the file extension.
pub fn open_lead_file(path: impl AsRef<Path>) -> RepositoryResult<Box<dyn LeadReader>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonLeadRepository::new(path))),
        Some("csv") => Ok(Box::new(CsvLeadRepository::new(path))),
        _ => Err(RepositoryError::UnsupportedFormat(path.display().to_string())),
    }
}
