use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// boxline - packaging company website
#[derive(Parser)]
#[command(name = "boxline")]
#[command(about = "Marketing website and contact form server", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate the configuration, then print it without secrets
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = boxline::Config::load(cli.config)?;

    boxline::observability::init_observability(
        "boxline",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::CheckConfig => cli::check::print(&config),
    }
}
