use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "feedplan-cli", version, about = "Feedplan CLI")]
struct Cli {
    /// Show debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily goal, feeding cadence and powder mixing
    Totals {
        #[arg(long)]
        json: bool,
    },
    /// Today's feeding log
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Consumed and remaining calories for today
    Progress {
        #[arg(long)]
        json: bool,
    },
    /// Suggested schedule for the rest of today
    Plan {
        #[command(flatten)]
        args: commands::PlanArgs,
    },
    /// Totals, progress and plan together
    Summary {
        #[command(flatten)]
        args: commands::PlanArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Totals { json } => commands::totals::run(json),
        Commands::Log { action } => commands::log::run(action),
        Commands::Progress { json } => commands::progress::run(json),
        Commands::Plan { args } => commands::plan::run(args),
        Commands::Summary { args } => commands::summary::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
