//! Common response types

pub mod response;

pub use response::SuccessResponse;
