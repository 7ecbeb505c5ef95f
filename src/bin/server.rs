// GraphQL Gateway - Server Binary
// Run with: cargo run --bin server -- run --server-type SERVICE

//! # GraphQL Gateway Server Binary
//!
//! Command-line entry point for the gateway.
//!
//! ## Usage Examples
//!
//! ```text
//! server run --server-type SERVICE --server-port 4000
//! server r -t KAFKA
//! GS_SERVER_TYPE=SERVICE GS_CORS_ENABLED=true server run
//! server version
//! ```
//!
//! Flags win over `GS_*` environment variables, which win over defaults.
//! A `.env` file in the working directory is loaded first when present.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use graphql_gateway::config::{DEFAULT_HOST, DEFAULT_PORT};
use graphql_gateway::version::VersionInfo;
use graphql_gateway::{launch, GatewayConfig};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "A GraphQL server and Services API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Starts the GraphQL server, HTTP REST Microservices or Kafka based Microservices
    ///
    /// The GraphQL server provides the query endpoints and the Services API
    /// provides the endpoints to save and update data.
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Print version information
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Configure server type as SERVICE or KAFKA
    #[arg(short = 't', long, env = "GS_SERVER_TYPE")]
    server_type: String,

    /// Configure server port
    #[arg(short = 'p', long, env = "GS_SERVER_PORT", default_value = DEFAULT_PORT)]
    server_port: String,

    /// Interface to listen on
    #[arg(long, env = "GS_SERVER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Allow cross-origin requests from any origin
    #[arg(long, env = "GS_CORS_ENABLED")]
    cors: bool,
}

impl RunArgs {
    fn into_config(self) -> GatewayConfig {
        GatewayConfig::new(self.server_type, self.server_port)
            .with_host(self.host)
            .with_cors(self.cors)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so its GS_* variables feed the flags
    let dotenv_result = dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dotenv_result {
        debug!("No .env file loaded: {}", e);
    }

    match cli.command {
        Commands::Version { json } => {
            let info = VersionInfo::current();
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", info.formatted_message());
            }
        }

        Commands::Run(args) => {
            let config = args.into_config();
            debug!("Configuration: {}", serde_json::to_string(&config)?);

            if let Err(e) = launch(&config).await {
                error!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
