//! Product query service
//!
//! Turns the optional `search` and `sort` listing parameters into a
//! `ProductFilter` and `SortOrder` and runs them against the repository.

mod service;


pub use service::ProductService;
