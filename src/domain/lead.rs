use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, LeadSource, LeadStatus};

/// A prospective customer record. Treated as read-only once loaded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    /// Free-form phone string, stored exactly as entered.
    pub phone: String,
    pub company: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    /// Qualification score, conventionally 0-100.
    pub score: i32,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Lead {
    /// Returns `true` when the lead carries at least one of `tags`.
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        // Iterate the smaller set.
        if self.tags.len() <= tags.len() {
            self.tags.iter().any(|tag| tags.contains(tag))
        } else {
            tags.iter().any(|tag| self.tags.contains(tag))
        }
    }
}

/// Lead data collected by importers before timestamps are assigned.
#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub score: i32,
    pub tags: BTreeSet<String>,
    pub note: Option<String>,
}

impl NewLead {
    #[must_use]
    pub fn new(id: LeadId, name: String, email: String, source: LeadSource) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: String::new(),
            company: String::new(),
            source,
            status: LeadStatus::New,
            score: 0,
            tags: BTreeSet::new(),
            note: None,
        }
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into().trim().to_string();
        self
    }

    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into().trim().to_string();
        self
    }

    #[must_use]
    pub fn status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// Finalizes the record with the provided timestamps.
    pub fn into_lead(self, created_at: NaiveDateTime, updated_at: NaiveDateTime) -> Lead {
        Lead {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            source: self.source,
            status: self.status,
            score: self.score,
            tags: self.tags,
            created_at,
            updated_at,
            note: self.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn new_lead_normalizes_fields() {
        let lead = NewLead::new(
            LeadId::new("l-1").unwrap(),
            "  Sarah Johnson ".to_string(),
            " Sarah@Example.COM ".to_string(),
            LeadSource::WebForm,
        )
        .phone(" (555) 123-4567 ")
        .company(" Acme ")
        .tags(["enterprise", " ", " urgent "])
        .note(Some("   ".to_string()))
        .into_lead(ts(), ts());

        assert_eq!(lead.name, "Sarah Johnson");
        assert_eq!(lead.email, "sarah@example.com");
        assert_eq!(lead.phone, "(555) 123-4567");
        assert_eq!(lead.company, "Acme");
        assert_eq!(
            lead.tags.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["enterprise", "urgent"]
        );
        assert_eq!(lead.note, None);
        assert_eq!(lead.status, LeadStatus::New);
    }

    #[test]
    fn has_any_tag_uses_or_semantics() {
        let lead = NewLead::new(
            LeadId::new("l-2").unwrap(),
            "Bob".to_string(),
            "bob@example.com".to_string(),
            LeadSource::Sms,
        )
        .tags(["enterprise", "urgent"])
        .into_lead(ts(), ts());

        let selected: BTreeSet<String> = ["urgent", "smb", "retail"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(lead.has_any_tag(&selected));

        let selected: BTreeSet<String> = ["smb".to_string()].into_iter().collect();
        assert!(!lead.has_any_tag(&selected));
    }

    #[test]
    fn lead_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "l-3",
            "name": "Amy",
            "email": "amy@example.com",
            "phone": "",
            "company": "",
            "source": "landing_page",
            "status": "qualified",
            "score": 90,
            "created_at": "2024-03-01T09:30:00",
            "updated_at": "2024-03-01T09:30:00"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.source, LeadSource::LandingPage);
        assert!(lead.tags.is_empty());
        assert!(lead.note.is_none());
    }
}
