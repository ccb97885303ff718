// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Form page and its submit handler
    cfg.route("/", web::get().to(handlers::pages::index))
        .route("/static/js/script.js", web::get().to(handlers::pages::script));

    // Generator routes
    cfg.route("/generate", web::post().to(handlers::generator::generate_passwords))
        .route("/history", web::get().to(handlers::history::get_history));
}
