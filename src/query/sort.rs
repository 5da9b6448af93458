//! Stable ordering of leads by a single field.

use std::cmp::Ordering;

use crate::domain::lead::Lead;
use crate::query::state::{SortDirection, SortField, SortState};

/// Compares two strings after Unicode lowercasing, without allocating.
fn cmp_case_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Ascending comparison of `a` and `b` on `field`.
pub fn compare_by_field(a: &Lead, b: &Lead, field: SortField) -> Ordering {
    match field {
        SortField::Name => cmp_case_folded(&a.name, &b.name),
        SortField::Score => a.score.cmp(&b.score),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Comparison honouring the direction in `state`.
pub fn compare(a: &Lead, b: &Lead, state: &SortState) -> Ordering {
    let ordering = compare_by_field(a, b, state.field);
    match state.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Returns a reordered copy of `leads`. Ties keep their input order.
pub fn sort_leads<'a>(leads: &[&'a Lead], state: &SortState) -> Vec<&'a Lead> {
    let mut sorted = leads.to_vec();
    sorted.sort_by(|a, b| compare(a, b, state));
    sorted
}

/// Sorts by a column key coming from an untyped source such as a UI event.
///
/// An unrecognized key leaves the order untouched.
pub fn sort_by_field_name<'a>(
    leads: &[&'a Lead],
    field: &str,
    direction: SortDirection,
) -> Vec<&'a Lead> {
    match field.parse::<SortField>() {
        Ok(field) => sort_leads(leads, &SortState::new(field, direction)),
        Err(_) => leads.to_vec(),
    }
}
