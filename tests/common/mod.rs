#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use pushkind_leads::domain::lead::{Lead, NewLead};
use pushkind_leads::domain::types::{LeadId, LeadSource};

pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Builds a lead created `minutes` after [`base_time`].
pub fn lead(
    id: &str,
    name: &str,
    score: i32,
    source: LeadSource,
    tags: &[&str],
    minutes: i64,
) -> Lead {
    let created_at = base_time() + Duration::minutes(minutes);
    NewLead::new(
        LeadId::new(id).unwrap(),
        name.to_string(),
        format!("{}@example.com", id),
        source,
    )
    .score(score)
    .tags(tags.iter().copied())
    .into_lead(created_at, created_at)
}
