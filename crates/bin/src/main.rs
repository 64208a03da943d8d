use clap::Parser;

mod cli;
mod commands {
    pub mod health;
    pub mod serve;
}

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::run(&args).await,
        Some(Commands::Health(args)) => commands::health::run(&args).await,
        // Bare `scandeck` serves with defaults, still honoring SCANDECK_* env vars
        None => match Cli::parse_from(["scandeck", "serve"]).command {
            Some(Commands::Serve(args)) => commands::serve::run(&args).await,
            _ => commands::serve::run(&cli::ServeArgs::default()).await,
        },
    }
}
