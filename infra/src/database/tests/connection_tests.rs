//! Unit tests for database connection pool

use pc_shared::config::DatabaseConfig;

use crate::database::connection::{DatabasePool, PoolStatistics};
use crate::InfrastructureError;

#[tokio::test]
async fn test_pool_creation_with_invalid_url() {
    let config = DatabaseConfig {
        url: "invalid://url".to_string(),
        connect_timeout: 5,
        ..Default::default()
    };

    let result = DatabasePool::new(&config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_connect_options_accepts_mysql_url() {
    assert!(DatabasePool::connect_options("mysql://root:pw@localhost:3306/product_store").is_ok());
    assert!(DatabasePool::connect_options("not a url").is_err());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_pool_health_check() {
    let config = DatabaseConfig::from_env();
    let pool = DatabasePool::new(&config).await.unwrap();
    assert!(pool.health_check().await.unwrap());

    pool.close().await;
    assert!(pool.is_closed());
}

#[test]
fn test_pool_statistics_display() {
    let stats = PoolStatistics {
        connections: 5,
        idle_connections: 3,
        max_connections: 10,
    };

    let display = format!("{}", stats);
    assert!(display.contains("5/10"));
    assert!(display.contains("3 idle"));
}
