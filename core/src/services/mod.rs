//! Business services containing domain logic and use cases.

pub mod product;
pub mod token;

// Re-export commonly used types
pub use product::ProductService;
pub use token::{TokenService, TokenServiceConfig};
