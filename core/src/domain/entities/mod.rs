//! Domain entities representing core business objects.

pub mod product;
pub mod token;


// Re-export commonly used types
pub use product::{is_reserved_field, Product, RESERVED_FIELDS};
pub use token::{Claims, IssuedToken, TOKEN_EXPIRY_DAYS};
