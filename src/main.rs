use clap::Parser;
use std::io;
use std::path::Path;

mod api;
mod cli;
mod client;
mod core;
mod generators;
mod models;

use crate::cli::{Args, CliCommand};
use crate::client::FormState;
use crate::core::config::Config;

fn init_logging(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(std::fs::File::create(log_file)?)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    init_logging(&config)?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or_default() {
        CliCommand::Serve { address, port } => {
            if let Some(address) = address {
                config.web_address = address;
            }
            if let Some(port) = port {
                config.web_port = port;
            }
            log::info!("🔒 Starting password generator service");
            cli::handlers::handle_serve(config).await
        }
        CliCommand::Generate {
            server_url,
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
        } => {
            let server_url = server_url.unwrap_or(config.server_url);
            let form = FormState::generator(&length, !no_uppercase, !no_lowercase, !no_numbers, symbols);
            cli::handlers::handle_generate(&server_url, &form)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
        }
    }
}
