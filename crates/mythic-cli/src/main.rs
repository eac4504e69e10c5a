use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mythic", version, about = "Mythic CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile overview and display name
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Preset quests
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// List achievements and their unlock state
    Achievements,
    /// Show this week's boss
    Boss,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Erase all stored progression
    Reset,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MYTHIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Quest { action } => commands::quest::run(action),
        Commands::Achievements => commands::achievements::run(),
        Commands::Boss => commands::boss::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset => commands::reset::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
