//! Property-based tests for the lead query pipeline.
//!
//! Tests validate:
//! 1. Filtered leads are an order-preserving subset of the input
//! 2. Sorted leads are a permutation of the filtered leads
//! 3. Pages concatenate back to the sorted leads
//! 4. Ties keep their filtered order
//! 5. The controller agrees with the pure pipeline functions

use std::collections::BTreeSet;

use proptest::prelude::*;
use pushkind_leads::domain::lead::Lead;
use pushkind_leads::domain::types::LeadSource;
use pushkind_leads::query::filter::filter_leads;
use pushkind_leads::query::sort::{compare, sort_leads};
use pushkind_leads::query::{FilterState, QueryController, SortDirection, SortField, SortState};

mod common;

const NAMES: &[&str] = &["Amy", "amy", "Bob", "Sarah Johnson", "Zoe", "Émile"];
const TAGS: &[&str] = &["enterprise", "urgent", "smb", "vip"];
const SEARCHES: &[&str] = &["", "a", "AMY", "example", "55", "zz"];

fn source_strategy() -> impl Strategy<Value = LeadSource> {
    prop::sample::select(LeadSource::ALL.to_vec())
}

fn leads_strategy() -> impl Strategy<Value = Vec<Lead>> {
    prop::collection::vec(
        (
            prop::sample::select(NAMES.to_vec()),
            0..5i32,
            source_strategy(),
            prop::sample::subsequence(TAGS.to_vec(), 0..=2),
            0..4i64,
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, score, source, tags, minutes))| {
                common::lead(&format!("lead-{i}"), name, score, source, &tags, minutes)
            })
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(SEARCHES.to_vec()),
        prop::collection::btree_set(source_strategy(), 0..3),
        prop::sample::subsequence(TAGS.to_vec(), 0..=2),
    )
        .prop_map(|(search, sources, tags)| FilterState {
            search_query: search.to_string(),
            sources,
            tags: tags.into_iter().map(String::from).collect(),
        })
}

fn sort_strategy() -> impl Strategy<Value = SortState> {
    (
        prop::sample::select(vec![SortField::Name, SortField::Score, SortField::CreatedAt]),
        prop::sample::select(vec![SortDirection::Asc, SortDirection::Desc]),
    )
        .prop_map(|(field, direction)| SortState::new(field, direction))
}

/// Drives a controller to the given state through its public operations.
fn controller_for(
    leads: Vec<Lead>,
    filter: &FilterState,
    sort: SortState,
    per_page: usize,
) -> QueryController {
    let mut controller = QueryController::new(leads, per_page);
    controller.set_search_query(filter.search_query.clone());
    for source in &filter.sources {
        controller.toggle_source(*source);
    }
    for tag in &filter.tags {
        controller.toggle_tag(tag.clone());
    }
    if controller.sort_field() != sort.field {
        controller.set_sort_field(sort.field);
    }
    controller.set_sort_direction(sort.direction);
    controller
}

fn position(leads: &[Lead], lead: &Lead) -> usize {
    leads
        .iter()
        .position(|candidate| std::ptr::eq(candidate, lead))
        .expect("lead must come from the input collection")
}

fn ids(leads: &[&Lead]) -> Vec<String> {
    leads.iter().map(|l| l.id.to_string()).collect()
}

proptest! {
    #[test]
    fn filtered_is_ordered_subset(leads in leads_strategy(), filter in filter_strategy()) {
        let filtered = filter_leads(&leads, &filter);
        let positions: Vec<usize> = filtered.iter().map(|l| position(&leads, l)).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sorted_is_permutation_of_filtered(
        leads in leads_strategy(),
        filter in filter_strategy(),
        sort in sort_strategy(),
    ) {
        let controller = controller_for(leads, &filter, sort, 10);
        let mut filtered = ids(&controller.filtered_leads());
        let mut sorted = ids(&controller.sorted_leads());
        filtered.sort();
        sorted.sort();
        prop_assert_eq!(filtered, sorted);
    }

    #[test]
    fn pages_reconstruct_sorted(
        leads in leads_strategy(),
        filter in filter_strategy(),
        sort in sort_strategy(),
        per_page in 1..7usize,
    ) {
        let mut controller = controller_for(leads, &filter, sort, per_page);
        let sorted = ids(&controller.sorted_leads());

        let mut concatenated = Vec::new();
        for page in 1..=controller.total_pages() {
            controller.set_current_page(page);
            let visible = controller.paginated_leads();
            prop_assert!(!visible.is_empty() && visible.len() <= per_page);
            concatenated.extend(ids(&visible));
        }
        prop_assert_eq!(concatenated, sorted);

        controller.set_current_page(controller.total_pages() + 1);
        prop_assert!(controller.paginated_leads().is_empty());
    }

    #[test]
    fn ties_keep_filtered_order(
        leads in leads_strategy(),
        filter in filter_strategy(),
        sort in sort_strategy(),
    ) {
        let filtered = filter_leads(&leads, &filter);
        let sorted = sort_leads(&filtered, &sort);
        for pair in sorted.windows(2) {
            let ordering = compare(pair[0], pair[1], &sort);
            prop_assert!(ordering.is_le());
            if ordering.is_eq() {
                prop_assert!(position(&leads, pair[0]) < position(&leads, pair[1]));
            }
        }
    }

    #[test]
    fn controller_matches_pure_pipeline(
        leads in leads_strategy(),
        filter in filter_strategy(),
        sort in sort_strategy(),
    ) {
        let expected = {
            let filtered = filter_leads(&leads, &filter);
            ids(&sort_leads(&filtered, &sort))
        };
        let controller = controller_for(leads, &filter, sort, 10);
        prop_assert_eq!(ids(&controller.sorted_leads()), expected);
        prop_assert_eq!(controller.filter_state(), &filter);
        prop_assert_eq!(controller.sort_state(), sort);
    }

    #[test]
    fn same_field_twice_restores_direction(
        leads in leads_strategy(),
        field in prop::sample::select(vec![SortField::Name, SortField::Score, SortField::CreatedAt]),
    ) {
        let mut controller = QueryController::new(leads, 10);
        controller.set_sort_field(field);
        let before = controller.sort_direction();
        controller.set_sort_field(field);
        controller.set_sort_field(field);
        prop_assert_eq!(controller.sort_direction(), before);
    }

    #[test]
    fn filter_writes_reset_page(
        leads in leads_strategy(),
        page in 1..10usize,
        source in source_strategy(),
        tag in prop::sample::select(TAGS.to_vec()),
        search in prop::sample::select(SEARCHES.to_vec()),
    ) {
        let mut controller = QueryController::new(leads, 3);

        controller.set_current_page(page);
        controller.set_search_query(search);
        prop_assert_eq!(controller.current_page(), 1);

        controller.set_current_page(page);
        controller.toggle_source(source);
        prop_assert_eq!(controller.current_page(), 1);

        controller.set_current_page(page);
        controller.toggle_tag(tag);
        prop_assert_eq!(controller.current_page(), 1);
    }
}

#[test]
fn scenario_tag_filter() {
    let leads = vec![
        common::lead("lead1", "Lead One", 10, LeadSource::Manual, &["enterprise", "urgent"], 0),
        common::lead("lead2", "Lead Two", 20, LeadSource::Manual, &["smb"], 1),
    ];
    let filter = FilterState {
        tags: BTreeSet::from(["enterprise".to_string()]),
        ..FilterState::default()
    };

    let filtered = filter_leads(&leads, &filter);
    assert_eq!(ids(&filtered), vec!["lead1"]);
}
