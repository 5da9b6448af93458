//! Lead query pipeline: filter, then sort, then paginate.
//!
//! [`filter`], [`sort`] and [`paginator`] are pure functions over borrowed
//! leads. [`controller::QueryController`] owns the query state and keeps the
//! derived views current after every mutation.

pub mod controller;
pub mod filter;
pub mod paginator;
pub mod sort;
pub mod state;

pub use controller::QueryController;
pub use state::{
    DEFAULT_ITEMS_PER_PAGE, FilterState, PaginationState, SortDirection, SortField, SortState,
};
