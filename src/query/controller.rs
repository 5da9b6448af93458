//! Stateful query controller with cached filtered and sorted views.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::lead::Lead;
use crate::domain::types::LeadSource;
use crate::dto::leads::LeadsPage;
use crate::query::filter::FilterPredicate;
use crate::query::paginator::{page_count, page_slice};
use crate::query::sort::compare;
use crate::query::state::{FilterState, PaginationState, SortDirection, SortField, SortState};

/// Owns the lead collection and the query state applied to it.
///
/// Derived views are stored as indices into `leads` and refreshed before
/// every mutating call returns: a filter change refilters and resorts, a
/// sort change resorts, a page change only moves the slice window.
///
/// `current_page` is not clamped against [`total_pages`](Self::total_pages);
/// a page past the end simply yields no leads.
#[derive(Debug, Clone)]
pub struct QueryController {
    leads: Vec<Lead>,
    filter: FilterState,
    sort: SortState,
    pagination: PaginationState,
    /// Indices of leads passing `filter`, in input order.
    filtered: Vec<usize>,
    /// `filtered` reordered by `sort`.
    sorted: Vec<usize>,
}

impl QueryController {
    /// Creates a controller with default filters and newest-first sorting.
    pub fn new(leads: Vec<Lead>, items_per_page: usize) -> Self {
        let mut controller = Self {
            leads,
            filter: FilterState::default(),
            sort: SortState::default(),
            pagination: PaginationState::new(items_per_page),
            filtered: Vec::new(),
            sorted: Vec::new(),
        };
        controller.refilter();
        controller
    }

    /// Replaces the whole lead collection and returns to the first page.
    pub fn replace_leads(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
        self.pagination.current_page = 1;
        self.refilter();
        log::debug!("Replaced leads: {} loaded", self.leads.len());
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.on_filter_changed();
    }

    /// Adds `source` to the selection, or removes it when already selected.
    pub fn toggle_source(&mut self, source: LeadSource) {
        if !self.filter.sources.remove(&source) {
            self.filter.sources.insert(source);
        }
        self.on_filter_changed();
    }

    /// Adds `tag` to the selection, or removes it when already selected.
    pub fn toggle_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.filter.tags.remove(&tag) {
            self.filter.tags.insert(tag);
        }
        self.on_filter_changed();
    }

    /// Header-click semantics: the active field flips direction, another
    /// field becomes active in descending order.
    pub fn set_sort_field(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortState::new(field, SortDirection::Desc);
        }
        self.resort();
        log::debug!("Sort set to {} {}", self.sort.field, self.sort.direction);
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort.direction = direction;
        self.resort();
        log::debug!("Sort direction set to {direction}");
    }

    /// Moves to `page` without bounds checking. Page `0` becomes `1`.
    pub fn set_current_page(&mut self, page: usize) {
        self.pagination.current_page = page.max(1);
        log::debug!(
            "Page set to {} of {}",
            self.pagination.current_page,
            self.total_pages()
        );
    }

    /// Drops every filter and returns to the first page. Sorting is kept.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.on_filter_changed();
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn search_query(&self) -> &str {
        &self.filter.search_query
    }

    pub fn selected_sources(&self) -> &BTreeSet<LeadSource> {
        &self.filter.sources
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.filter.tags
    }

    pub fn sort_field(&self) -> SortField {
        self.sort.field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort.direction
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.pagination.items_per_page
    }

    /// Leads passing the current filters, in input order.
    pub fn filtered_leads(&self) -> Vec<&Lead> {
        self.resolve(&self.filtered)
    }

    /// Filtered leads in display order.
    pub fn sorted_leads(&self) -> Vec<&Lead> {
        self.resolve(&self.sorted)
    }

    /// Leads visible on the current page.
    pub fn paginated_leads(&self) -> Vec<&Lead> {
        self.resolve(page_slice(
            &self.sorted,
            self.pagination.current_page,
            self.pagination.items_per_page,
        ))
    }

    /// Number of leads passing the current filters.
    pub fn total_leads(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.filtered.len(), self.pagination.items_per_page)
    }

    /// `true` when the current page lies past the last page.
    pub fn is_page_out_of_range(&self) -> bool {
        self.pagination.current_page > self.total_pages()
    }

    /// Every tag present in the collection, sorted.
    pub fn available_tags(&self) -> BTreeSet<&str> {
        self.leads
            .iter()
            .flat_map(|lead| lead.tags.iter().map(String::as_str))
            .collect()
    }

    /// Lead count per source over the whole collection.
    pub fn source_counts(&self) -> BTreeMap<LeadSource, usize> {
        let mut counts = BTreeMap::new();
        for lead in &self.leads {
            *counts.entry(lead.source).or_insert(0) += 1;
        }
        counts
    }

    /// Serializable view of the current page and query state.
    pub fn snapshot(&self) -> LeadsPage {
        LeadsPage::from(self)
    }

    fn resolve(&self, indices: &[usize]) -> Vec<&Lead> {
        indices.iter().map(|&i| &self.leads[i]).collect()
    }

    fn on_filter_changed(&mut self) {
        self.pagination.current_page = 1;
        self.refilter();
        log::debug!(
            "Filters changed (search: {:?}, sources: {:?}, tags: {:?}): {} of {} leads match",
            self.filter.search_query,
            self.filter.sources,
            self.filter.tags,
            self.filtered.len(),
            self.leads.len()
        );
    }

    fn refilter(&mut self) {
        let predicate = FilterPredicate::new(&self.filter);
        self.filtered = self
            .leads
            .iter()
            .enumerate()
            .filter(|(_, lead)| predicate.matches(lead))
            .map(|(i, _)| i)
            .collect();
        self.resort();
    }

    fn resort(&mut self) {
        let leads = &self.leads;
        let sort = &self.sort;
        let mut sorted = self.filtered.clone();
        sorted.sort_by(|&a, &b| compare(&leads[a], &leads[b], sort));
        self.sorted = sorted;
    }
}
