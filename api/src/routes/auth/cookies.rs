//! Session cookie construction

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use pc_shared::config::{CookieConfig, SameSitePolicy};

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::None => SameSite::None,
    }
}

/// Cookie carrying `token` for `max_age_seconds`
pub fn session_cookie(config: &CookieConfig, token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(config.name.clone(), token)
        .path(config.path.clone())
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(config.same_site))
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

/// Cookie that makes the browser drop the session cookie.
///
/// Attributes must match the issued cookie or the browser keeps the original.
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(config, String::new(), 0);
    cookie.make_removal();
    cookie
}
