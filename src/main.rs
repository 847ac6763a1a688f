//! API gateway bootstrap.
//!
//! Loads a gateway description, compiles it into the execution plan and
//! reports the result. The process refuses to continue on the first
//! configuration error.
//!
//! ```text
//!  configuration.{toml,json,yaml}
//!        │
//!        ▼
//!  ┌───────────┐    ┌────────────────────────────────────────────┐
//!  │  loader   │───▶│               compiler                     │
//!  └───────────┘    │ version → hosts → endpoints → backends     │
//!                   │   validation · defaults · templates · style│
//!                   └──────────────────────┬─────────────────────┘
//!                                          ▼
//!                               ServiceConfig (immutable)
//!                                          │
//!                                          ▼
//!                             router / proxy factories
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use api_gateway::config::load_config;
use api_gateway::observability::logging;
use api_gateway::RoutingStyle;

#[derive(Parser)]
#[command(name = "api-gateway")]
#[command(about = "Compile and check an API gateway configuration", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "configuration.toml")]
    config: PathBuf,

    /// Port of the service (overrides the configuration when non-zero)
    #[arg(short, long, default_value_t = 0)]
    port: u16,

    /// Logging level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable the debug namespace
    #[arg(short, long)]
    debug: bool,

    /// Path syntax of the routing engine (colon or brace)
    #[arg(long, default_value = "colon")]
    routing_style: RoutingStyle,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print the compiled plan as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level, cli.json_logs) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    let mut service = match load_config(&cli.config, cli.routing_style) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(config = %cli.config.display(), error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    service.debug = service.debug || cli.debug;
    if cli.port != 0 {
        service.port = cli.port;
    }

    tracing::info!(
        port = service.port,
        debug = service.debug,
        routing_style = %service.routing_style,
        endpoints = service.endpoints.len(),
        "Configuration compiled"
    );
    for endpoint in &service.endpoints {
        tracing::info!(
            method = %endpoint.method,
            endpoint = %endpoint.endpoint,
            backends = endpoint.backend.len(),
            timeout_ms = endpoint.timeout.as_millis() as u64,
            "Route"
        );
    }

    if cli.dump {
        match serde_json::to_string_pretty(&service) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize the compiled plan");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
