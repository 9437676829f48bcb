//! Translation of the listing parameters into a filter and an ordering.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// The `sort` value selecting newest-first ordering
pub const RECENT_SORT: &str = "recent";

/// Filter applied to the product collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive literal substring the name must contain.
    /// `None` matches every product.
    pub name_contains: Option<String>,
}

impl ProductFilter {
    /// Matches every product
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from the raw `search` parameter.
    ///
    /// A missing or empty search matches everything.
    pub fn from_search(search: Option<&str>) -> Self {
        Self {
            name_contains: search.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Whether the filter restricts the result set at all
    pub fn is_match_all(&self) -> bool {
        self.name_contains.is_none()
    }

    /// Evaluates the filter against a single product
    pub fn matches(&self, product: &Product) -> bool {
        match &self.name_contains {
            None => true,
            Some(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Ordering of the result list by creation date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
}

impl SortOrder {
    /// Builds an ordering from the raw `sort` parameter.
    ///
    /// Missing or exactly `recent` sorts newest first; any other value sorts
    /// oldest first.
    pub fn from_param(sort: Option<&str>) -> Self {
        match sort {
            None | Some(RECENT_SORT) => SortOrder::Recent,
            Some(_) => SortOrder::Oldest,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Recent)
    }

    /// SQL keyword for this ordering
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Recent => "DESC",
            SortOrder::Oldest => "ASC",
        }
    }
}
