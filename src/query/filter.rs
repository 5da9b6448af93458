//! Composite lead filter: free-text search AND source set AND tag set.

use crate::domain::lead::Lead;
use crate::query::state::FilterState;

/// A [`FilterState`] prepared for repeated evaluation.
///
/// The search needle is lowercased once instead of once per lead.
pub struct FilterPredicate<'a> {
    state: &'a FilterState,
    needle: String,
}

impl<'a> FilterPredicate<'a> {
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            state,
            needle: state.search_query.to_lowercase(),
        }
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_search(lead) && self.matches_source(lead) && self.matches_tags(lead)
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        let query = &self.state.search_query;
        if query.is_empty() {
            return true;
        }

        lead.name.to_lowercase().contains(&self.needle)
            || lead.email.to_lowercase().contains(&self.needle)
            || lead.company.to_lowercase().contains(&self.needle)
            // Phone is compared verbatim, punctuation included.
            || lead.phone.contains(query.as_str())
    }

    fn matches_source(&self, lead: &Lead) -> bool {
        self.state.sources.is_empty() || self.state.sources.contains(&lead.source)
    }

    fn matches_tags(&self, lead: &Lead) -> bool {
        self.state.tags.is_empty() || lead.has_any_tag(&self.state.tags)
    }
}

/// Returns `true` when `lead` passes every dimension of `state`.
pub fn matches(lead: &Lead, state: &FilterState) -> bool {
    FilterPredicate::new(state).matches(lead)
}

/// Keeps the leads that pass `state`, preserving input order.
pub fn filter_leads<'a>(leads: &'a [Lead], state: &FilterState) -> Vec<&'a Lead> {
    let predicate = FilterPredicate::new(state);
    leads.iter().filter(|lead| predicate.matches(lead)).collect()
}
