use clap::Parser;
use topline::adapter::inbound::cli::{run, Cli};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run::execute(&cli).await {
        Ok(summary) => {
            info!(
                leagues = summary.leagues,
                matches = summary.matches,
                failures = summary.failures,
                "topline finished"
            );
        }
        Err(e) => {
            error!(error = %e, "Fatal error");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
