//! Product listing use case

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductFilter, SortOrder};
use crate::errors::DomainResult;
use crate::repositories::ProductRepository;

/// Read-only service over the product collection
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists products matching `search`, ordered according to `sort`
    ///
    /// # Arguments
    ///
    /// * `search` - Case-insensitive name substring; missing or empty matches all
    /// * `sort` - `recent` (or missing) for newest first, anything else for oldest first
    ///
    /// # Returns
    ///
    /// Every matching product; the store's errors are passed through unchanged
    pub async fn list_products(
        &self,
        search: Option<&str>,
        sort: Option<&str>,
    ) -> DomainResult<Vec<Product>> {
        let filter = ProductFilter::from_search(search);
        let order = SortOrder::from_param(sort);
        tracing::debug!(?filter, ?order, "Listing products");

        let products = self.repository.find(&filter, order).await.map_err(|e| {
            tracing::error!("Product query failed: {}", e);
            e
        })?;

        tracing::debug!(count = products.len(), "Products listed");
        Ok(products)
    }

    /// Whether the product store currently answers
    pub async fn is_store_reachable(&self) -> bool {
        self.repository.ping().await.is_ok()
    }
}
