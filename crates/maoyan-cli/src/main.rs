use clap::Parser;
use maoyan_cli::{pipeline, setup_logging, Cli};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    // Failures are reported, never turned into a non-zero exit status
    if let Err(e) = pipeline::run(&cli.run_options()).await {
        error!("Run failed: {}", e);
    }
}
