// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Run the generator web service
    Serve {
        /// Address to bind
        #[arg(long, env = "WEB_ADDRESS")]
        address: Option<String>,

        /// Port to bind
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,
    },

    /// Submit the generator form to a running service and print the result
    Generate {
        /// Base URL of the service
        #[arg(long, env = "SERVER_URL")]
        server_url: Option<String>,

        /// Password length, sent as typed
        #[arg(long, short, default_value = "16")]
        length: String,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out numbers
        #[arg(long)]
        no_numbers: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Serve {
            address: None,
            port: None,
        }
    }
}
