//! In-memory implementation of ProductRepository for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductFilter, SortOrder};
use crate::errors::{DomainError, RepositoryError};

use super::r#trait::ProductRepository;

/// Mock product repository backed by a vector
#[derive(Clone, Default)]
pub struct MockProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockProductRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `products`
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Add a product
    pub async fn insert(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    /// Make every subsequent call fail as if the store were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("mock store offline".to_string()).into());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find(
        &self,
        filter: &ProductFilter,
        order: SortOrder,
    ) -> Result<Vec<Product>, DomainError> {
        self.check_available()?;

        let products = self.products.read().await;
        let mut matches: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        match order {
            SortOrder::Recent => matches.sort_by(|a, b| b.creation_date.cmp(&a.creation_date)),
            SortOrder::Oldest => matches.sort_by(|a, b| a.creation_date.cmp(&b.creation_date)),
        }

        Ok(matches)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_available()
    }
}
