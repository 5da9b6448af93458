use std::collections::BTreeSet;

use crate::domain::types::LeadSource;
use crate::dto::leads::{LeadsPage, LeadsQuery};
use crate::models::config::AppConfig;
use crate::query::controller::QueryController;
use crate::query::state::{SortDirection, SortField};
use crate::repository::LeadReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the leads and renders the page described by `query`.
pub fn load_leads_page<R>(
    repo: &R,
    config: &AppConfig,
    query: LeadsQuery,
) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    config.validate()?;

    let leads = repo.list_leads().map_err(|err| {
        log::error!("Failed to load leads: {err}");
        ServiceError::from(err)
    })?;

    let mut controller = QueryController::new(leads, config.items_per_page);
    apply_query(&mut controller, query)?;

    Ok(controller.snapshot())
}

/// Replays `query` onto `controller` through its regular operations.
///
/// Filters go first because each of them returns to page 1.
pub fn apply_query(controller: &mut QueryController, query: LeadsQuery) -> ServiceResult<()> {
    let search = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(search) = search {
        controller.set_search_query(search);
    }

    let sources = query
        .sources
        .iter()
        .map(|s| s.parse::<LeadSource>())
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|err| {
            log::warn!("Rejected lead source filter: {err}");
            ServiceError::from(err)
        })?;
    for source in sources {
        controller.toggle_source(source);
    }

    let tags: BTreeSet<String> = query
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    for tag in tags {
        controller.toggle_tag(tag);
    }

    if let Some(sort) = query.sort.as_deref() {
        match sort.parse::<SortField>() {
            Ok(field) if field != controller.sort_field() => controller.set_sort_field(field),
            Ok(_) => {}
            Err(_) => log::warn!("Unknown sort field `{sort}`, keeping current order"),
        }
    }
    if let Some(direction) = query.direction {
        controller.set_sort_direction(direction);
    } else if query.sort.is_some() {
        controller.set_sort_direction(SortDirection::Desc);
    }

    if let Some(page) = query.page {
        controller.set_current_page(page);
    }

    Ok(())
}
