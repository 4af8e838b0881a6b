use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use rust_decimal::Decimal;
use swapdesk::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for swapdesk::AppCommand {
    fn from(cmd: Commands) -> swapdesk::AppCommand {
        match cmd {
            Commands::Balances => swapdesk::AppCommand::Balances,
            Commands::Swap { amount, from, to } => swapdesk::AppCommand::Swap { amount, from, to },
            Commands::Sum { n } => swapdesk::AppCommand::Sum { n },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display ranked wallet balances with their value
    Balances,
    /// Quote a token swap at current prices
    Swap {
        /// Amount of the send token
        amount: Decimal,
        /// Token to send
        from: String,
        /// Token to receive
        to: String,
    },
    /// Sum the integers 1 through N three ways
    Sum {
        /// Upper bound of the sum
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => swapdesk::cli::setup::setup(),
        Some(cmd) => swapdesk::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
