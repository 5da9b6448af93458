use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::Utc;

use crate::domain::lead::Lead;
use crate::forms::import::parse_leads_csv;
use crate::repository::errors::RepositoryResult;
use crate::repository::{LeadReader, ensure_unique_ids};

/// Reads leads from a file holding a JSON array of lead records.
#[derive(Debug, Clone)]
pub struct JsonLeadRepository {
    path: PathBuf,
}

impl JsonLeadRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LeadReader for JsonLeadRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let file = File::open(&self.path)?;
        let leads: Vec<Lead> = serde_json::from_reader(BufReader::new(file))?;
        ensure_unique_ids(&leads)?;
        log::info!("Loaded {} leads from {}", leads.len(), self.path.display());
        Ok(leads)
    }
}

/// Reads leads from a CSV export, see [`parse_leads_csv`].
///
/// Rows without a creation time are stamped with the load time.
#[derive(Debug, Clone)]
pub struct CsvLeadRepository {
    path: PathBuf,
}

impl CsvLeadRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LeadReader for CsvLeadRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let file = File::open(&self.path)?;
        let leads = parse_leads_csv(BufReader::new(file), Utc::now().naive_utc())?;
        ensure_unique_ids(&leads)?;
        log::info!("Loaded {} leads from {}", leads.len(), self.path.display());
        Ok(leads)
    }
}
