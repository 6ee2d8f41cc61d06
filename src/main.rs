use clap::Parser;
use keepalive::cli::{run, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run::run_keep_alive(&cli.options).await,
        Commands::Check => run::run_check(&cli.options).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
