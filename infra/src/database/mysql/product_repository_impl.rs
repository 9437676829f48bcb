//! MySQL implementation of the ProductRepository trait.
//!
//! Products live in a single `products` table. Everything beyond `id`,
//! `name` and `creation_date` is kept in the JSON `attributes` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};

use pc_core::domain::entities::Product;
use pc_core::domain::value_objects::{ProductFilter, SortOrder};
use pc_core::errors::DomainError;
use pc_core::repositories::ProductRepository;

use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

/// Escape character used in `LIKE ... ESCAPE` clauses
const LIKE_ESCAPE: char = '!';

/// MySQL implementation of ProductRepository
#[derive(Clone)]
pub struct MySqlProductRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create a repository sharing the given pool
    pub fn from_database(database: &DatabasePool) -> Self {
        Self::new(database.get_pool().clone())
    }

    /// Build the SELECT statement and its optional LIKE pattern
    pub(crate) fn build_select(filter: &ProductFilter, order: SortOrder) -> (String, Option<String>) {
        let mut sql = String::from("SELECT id, name, creation_date, attributes FROM products");
        let pattern = filter.name_contains.as_deref().map(|needle| {
            sql.push_str(&format!(
                " WHERE LOWER(name) LIKE LOWER(?) ESCAPE '{}'",
                LIKE_ESCAPE
            ));
            format!("%{}%", escape_like(needle))
        });
        sql.push_str(" ORDER BY creation_date ");
        sql.push_str(order.as_sql());

        (sql, pattern)
    }

    /// Convert database row to Product entity
    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let attributes: Option<Json<Map<String, Value>>> = row
            .try_get("attributes")
            .map_err(InfrastructureError::Database)?;

        let product = Product {
            id: row.try_get("id").map_err(InfrastructureError::Database)?,
            name: row.try_get("name").map_err(InfrastructureError::Database)?,
            creation_date: row
                .try_get::<DateTime<Utc>, _>("creation_date")
                .map_err(InfrastructureError::Database)?,
            attributes: Map::new(),
        };

        Ok(product.with_attributes(attributes.map(|Json(map)| map).unwrap_or_default()))
    }
}

/// Escape `LIKE` wildcards so `needle` is matched literally
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find(
        &self,
        filter: &ProductFilter,
        order: SortOrder,
    ) -> Result<Vec<Product>, DomainError> {
        let (sql, pattern) = Self::build_select(filter, order);

        let mut query = sqlx::query(&sql);
        if let Some(pattern) = pattern {
            query = query.bind(pattern);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to query products: {}", e);
            InfrastructureError::Database(e)
        })?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::Database)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_without_filter() {
        let (sql, pattern) =
            MySqlProductRepository::build_select(&ProductFilter::all(), SortOrder::Recent);
        assert_eq!(
            sql,
            "SELECT id, name, creation_date, attributes FROM products ORDER BY creation_date DESC"
        );
        assert!(pattern.is_none());
    }

    #[test]
    fn test_select_with_search_ascending() {
        let filter = ProductFilter::from_search(Some("Lamp"));
        let (sql, pattern) = MySqlProductRepository::build_select(&filter, SortOrder::Oldest);
        assert!(sql.contains("WHERE LOWER(name) LIKE LOWER(?) ESCAPE '!'"));
        assert!(sql.ends_with("ORDER BY creation_date ASC"));
        assert_eq!(pattern.as_deref(), Some("%Lamp%"));
    }

    #[test]
    fn test_empty_search_adds_no_where_clause() {
        let filter = ProductFilter::from_search(Some(""));
        let (sql, pattern) = MySqlProductRepository::build_select(&filter, SortOrder::Recent);
        assert!(!sql.contains("WHERE"));
        assert!(pattern.is_none());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("abc"), "abc");
        assert_eq!(escape_like("50%"), "50!%");
        assert_eq!(escape_like("a_b"), "a!_b");
        assert_eq!(escape_like("hey!"), "hey!!");
    }
}
