//! Session routes
//!
//! - `POST /jwt` issues a session token in an HttpOnly cookie
//! - `GET /logout` clears that cookie

pub mod cookies;
pub mod jwt;
pub mod logout;

pub use cookies::{removal_cookie, session_cookie};
