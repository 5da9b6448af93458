//! CSV import of lead lists.

use std::io::Read;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::{LeadId, LeadSource, LeadStatus};
use crate::forms::FormError;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One CSV record as written by spreadsheet exports.
#[derive(Debug, Deserialize, Validate)]
pub struct LeadCsvRow {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub source: String,
    #[serde(default)]
    pub status: String,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub score: Option<i32>,
    /// Comma separated tag list.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub note: String,
}

fn parse_timestamp(value: &str, row: usize) -> Result<Option<NaiveDateTime>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(parsed.naive_utc()));
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(Some)
        .ok_or_else(|| FormError::InvalidTimestamp {
            row,
            value: value.to_string(),
        })
}

impl LeadCsvRow {
    /// Validates the row and converts it into a [`Lead`].
    ///
    /// `row` is the 1-based data row used in error messages; `now` stands in
    /// for a missing creation time.
    pub fn into_lead(self, row: usize, now: NaiveDateTime) -> Result<Lead, FormError> {
        self.validate()
            .map_err(|source| FormError::Validation { row, source })?;

        let id = if self.id.trim().is_empty() {
            LeadId::generate()
        } else {
            LeadId::new(self.id).map_err(|_| FormError::InvalidId { row })?
        };
        let source = self
            .source
            .parse::<LeadSource>()
            .map_err(|_| FormError::InvalidSource {
                row,
                value: self.source.clone(),
            })?;
        let status = if self.status.trim().is_empty() {
            LeadStatus::New
        } else {
            self.status
                .parse::<LeadStatus>()
                .map_err(|_| FormError::InvalidStatus {
                    row,
                    value: self.status.clone(),
                })?
        };

        let created_at = parse_timestamp(&self.created_at, row)?.unwrap_or(now);
        let updated_at = parse_timestamp(&self.updated_at, row)?.unwrap_or(created_at);
        let note = Some(ammonia::clean(&self.note));

        Ok(NewLead::new(id, self.name, self.email, source)
            .phone(self.phone)
            .company(self.company)
            .status(status)
            .score(self.score.unwrap_or(0))
            .tags(self.tags.split(','))
            .note(note)
            .into_lead(created_at, updated_at))
    }
}

/// Parses a CSV document with a header row into leads.
///
/// Stops at the first invalid row.
pub fn parse_leads_csv<R: Read>(reader: R, now: NaiveDateTime) -> Result<Vec<Lead>, FormError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut leads = Vec::new();
    for (index, record) in rdr.deserialize::<LeadCsvRow>().enumerate() {
        let row = index + 1;
        let record = record.map_err(|source| FormError::Csv { row, source })?;
        leads.push(record.into_lead(row, now)?);
    }

    log::info!("Parsed {} leads from CSV", leads.len());
    Ok(leads)
}
