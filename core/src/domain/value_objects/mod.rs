//! Value objects describing how the product collection is queried.

pub mod product_query;

pub use product_query::{ProductFilter, SortOrder, RECENT_SORT};
