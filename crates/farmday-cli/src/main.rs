use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "farmday", version, about = "Daily ascension material farming schedule")]
struct Cli {
    /// Directory holding the dataset tables (defaults to config, then the bundled data)
    #[arg(long, global = true, env = "FARMDAY_DATA")]
    data: Option<PathBuf>,
    /// Day index to use instead of today (0 = Sunday … 6 = Saturday)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=6))]
    day: Option<u8>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Characters or weapons farmable today
    Today(commands::today::TodayArgs),
    /// Character catalog
    Characters(commands::catalog::CatalogArgs),
    /// Weapon catalog
    Weapons(commands::catalog::CatalogArgs),
    /// List filter options for a catalog
    Filters {
        /// "characters" or "weapons"
        kind: String,
    },
    /// Show materials and domains for one character or weapon
    Detail(commands::detail::DetailArgs),
    /// Countdown to the next server reset
    Reset(commands::reset::ResetArgs),
    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Report references in the dataset that do not resolve
    Check,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .with_env_var("FARMDAY_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let source = commands::DataSource {
        dir: cli.data,
        day: cli.day,
    };
    let result = match cli.command {
        Commands::Today(args) => commands::today::run(&source.context().await, args),
        Commands::Characters(args) => {
            commands::catalog::run_characters(&source.context().await, args)
        }
        Commands::Weapons(args) => commands::catalog::run_weapons(&source.context().await, args),
        Commands::Filters { kind } => commands::catalog::run_filters(&source.context().await, &kind),
        Commands::Detail(args) => commands::detail::run(&source.context().await, args),
        Commands::Reset(args) => commands::reset::run(args).await,
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Check => commands::check::run(&source.context().await),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
