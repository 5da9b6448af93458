use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::lead::Lead;
use crate::domain::types::LeadSource;
use crate::pagination::Paginated;
use crate::query::controller::QueryController;
use crate::query::state::{SortDirection, SortField};

/// Query parameters accepted by the lead list service.
///
/// Values stay untyped where they come straight from user input.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LeadsQuery {
    /// Free-text search entered by the user.
    pub search: Option<String>,
    /// Selected source names, e.g. `sms`.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Selected tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Column key to sort by.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub direction: Option<SortDirection>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the lead list.
#[derive(Debug, Serialize)]
pub struct LeadsPage {
    /// Leads on the current page with the page strip.
    pub leads: Paginated<Lead>,
    /// Leads passing the filters across all pages.
    pub total_leads: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
    pub selected_sources: BTreeSet<LeadSource>,
    pub selected_tags: BTreeSet<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Every tag in the collection, for filter badges.
    pub available_tags: Vec<String>,
    /// Lead count per source across the collection.
    pub source_counts: BTreeMap<LeadSource, usize>,
    pub page_out_of_range: bool,
}

impl From<&QueryController> for LeadsPage {
    fn from(controller: &QueryController) -> Self {
        let items = controller
            .paginated_leads()
            .into_iter()
            .cloned()
            .collect();
        let total_pages = controller.total_pages();
        let search_query = Some(controller.search_query().to_string()).filter(|s| !s.is_empty());

        Self {
            leads: Paginated::new(items, controller.current_page(), total_pages),
            total_leads: controller.total_leads(),
            total_pages,
            items_per_page: controller.items_per_page(),
            search_query,
            selected_sources: controller.selected_sources().clone(),
            selected_tags: controller.selected_tags().clone(),
            sort_field: controller.sort_field(),
            sort_direction: controller.sort_direction(),
            available_tags: controller
                .available_tags()
                .into_iter()
                .map(String::from)
                .collect(),
            source_counts: controller.source_counts(),
            page_out_of_range: controller.is_page_out_of_range(),
        }
    }
}
