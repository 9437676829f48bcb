use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /jwt`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTokenRequest {
    /// Address the session token is issued for
    #[validate(email)]
    pub email: String,
}
