// src/api/utils.rs

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::HttpRequest;
use log::debug;
use uuid::Uuid;

use crate::api::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Resolve the caller's session from its cookie, minting a new id when the
/// cookie is missing, malformed or points at an expired session.
pub fn session_id(req: &HttpRequest, state: &AppState) -> Uuid {
    let cookie = req.cookie(SESSION_COOKIE);
    let id = state.sessions.resolve(cookie.as_ref().map(|c| c.value()));
    debug!("🍪 Request bound to session {}", id);
    id
}

/// Session cookie carrying `id`: HttpOnly, SameSite=Lax, scoped to `/`.
pub fn session_cookie(id: Uuid, state: &AppState) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session_cookie_secure)
        .max_age(time::Duration::seconds(state.sessions.lifetime_secs()))
        .finish()
}
