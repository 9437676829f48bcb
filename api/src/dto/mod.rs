pub mod auth;
pub mod health;
pub mod product;

pub use auth::IssueTokenRequest;
pub use health::HealthResponse;
pub use product::ProductQuery;
