use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DATABASE_UP: &str = "up";
pub const DATABASE_DOWN: &str = "down";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}

impl HealthResponse {
    pub fn new(database_reachable: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            database: if database_reachable { DATABASE_UP } else { DATABASE_DOWN }.to_string(),
        }
    }
}
