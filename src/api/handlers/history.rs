// src/api/handlers/history.rs

use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use crate::api::types::HistoryResponse;
use crate::api::utils::session_id;
use crate::api::AppState;

/// Session history
///
/// Lists the passwords generated in the caller's session, oldest first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "Generator",
    responses(
        (status = 200, description = "Passwords generated in this session", body = HistoryResponse)
    )
)]
pub async fn get_history(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let session = session_id(&req, &state);
    let history = state.sessions.history(session);
    debug!("📜 Session {} has {} history entries", session, history.len());
    HttpResponse::Ok().json(HistoryResponse { history })
}
