// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;
use crate::core::session::SessionStore;
use crate::generators::PasswordGenerator;

/// Shared state handed to every worker.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub generator: PasswordGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.history_limit, config.session_lifetime);
        Self {
            config,
            sessions,
            generator: PasswordGenerator::new(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_passwords,
        crate::api::handlers::history::get_history
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::HistoryResponse,
            crate::api::types::ErrorResponse,
            crate::models::GeneratedPassword
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "passgen_web API",
        version = "0.1.0",
        description = "Random password generator with per-session history",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let (address, port) = state.config.bind_address();
    log::info!("Starting password generator on {}:{}", address, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;
