use serde::{Deserialize, Serialize};

/// Query string of `GET /products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,

    /// `recent` for newest first; any other value sorts oldest first
    pub sort: Option<String>,
}
