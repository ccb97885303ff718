// src/cli/handlers.rs
use actix_web::web;
use console::style;
use std::io;

use crate::api::{self, AppState};
use crate::client::{FormState, SubmitError, SubmitEvent, SubmitHandler, TerminalSink};
use crate::core::config::Config;

// Run the web service until it is stopped
pub async fn handle_serve(config: Config) -> io::Result<()> {
    let state = web::Data::new(AppState::new(config));

    // Purge expired sessions in the background
    {
        let state = state.clone();
        let period = state.config.session_cleanup_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let purged = state.sessions.purge_expired();
                if purged > 0 {
                    log::debug!("🧹 Purged {} expired session(s)", purged);
                }
            }
        });
    }

    println!("🚀 Password generator listening on http://{}:{}", state.config.web_address, state.config.web_port);
    api::start_server(state).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })
}

// Submit the form once against `server_url` and print what the page would show
pub async fn handle_generate(server_url: &str, form: &FormState) -> Result<(), SubmitError> {
    let handler = SubmitHandler::new(server_url);
    log::info!("🔐 Requesting passwords from {}", handler.endpoint());

    let mut event = SubmitEvent::new();
    let mut sink = TerminalSink::stdout();
    handler.on_submit(&mut event, form, &mut sink).await.map_err(|e| {
        eprintln!("{} {}", style("❌").red(), e);
        e
    })
}
