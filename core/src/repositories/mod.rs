pub mod product;

pub use product::{MockProductRepository, ProductRepository};
