//! MySQL repository implementations

pub mod product_repository_impl;

pub use product_repository_impl::{escape_like, MySqlProductRepository};
