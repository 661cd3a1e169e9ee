use clap::Parser;
use ethoracle::cli::{check, output, run, CheckCommand, Cli, Commands};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Oracle => run::execute_oracle(&cli).await,
        Commands::Client => run::execute_client(&cli).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli.config),
    };

    if let Err(e) = result {
        if e.is_fatal_init() {
            error!(error = %e, "Startup failed");
        } else {
            error!(error = %e, "Fatal error");
        }
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
