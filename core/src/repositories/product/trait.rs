//! Product repository trait defining the read interface to the catalog collection.

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductFilter, SortOrder};
use crate::errors::DomainError;

/// Repository trait for reading the product collection
///
/// The catalog is read-only from the API's point of view; implementations
/// only need to run one filtered, ordered retrieval and answer a liveness
/// probe.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Return every product matching `filter`, ordered by creation date
    ///
    /// # Arguments
    /// * `filter` - Name filter; `ProductFilter::all()` matches every record
    /// * `order` - `SortOrder::Recent` for newest first, `SortOrder::Oldest` otherwise
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - All matches, unpaginated (possibly empty)
    /// * `Err(DomainError)` - The store could not be queried
    ///
    /// # Example
    /// ```no_run
    /// # use pc_core::repositories::ProductRepository;
    /// # use pc_core::domain::value_objects::{ProductFilter, SortOrder};
    /// # async fn example(repo: &impl ProductRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let filter = ProductFilter::from_search(Some("lamp"));
    /// for product in repo.find(&filter, SortOrder::Recent).await? {
    ///     println!("{} ({})", product.name, product.creation_date);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find(&self, filter: &ProductFilter, order: SortOrder)
        -> Result<Vec<Product>, DomainError>;

    /// Check that the underlying store answers
    async fn ping(&self) -> Result<(), DomainError>;
}
