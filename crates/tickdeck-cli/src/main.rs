use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tickdeck", version, about = "Countdown, stopwatch and pomodoro in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count down from minutes and seconds
    Countdown(commands::countdown::CountdownArgs),
    /// Interactive stopwatch with laps
    Stopwatch(commands::stopwatch::StopwatchArgs),
    /// Alternate work and break sessions
    Pomodoro(commands::pomodoro::PomodoroArgs),
    /// Show the time, a greeting and optionally a quote
    Clock(commands::clock::ClockArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TICKDECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Countdown(args) => commands::countdown::run(args).await,
        Commands::Stopwatch(args) => commands::stopwatch::run(args).await,
        Commands::Pomodoro(args) => commands::pomodoro::run(args).await,
        Commands::Clock(args) => commands::clock::run(args).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tickdeck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
