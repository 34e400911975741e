use clap::Parser;

use folio::cli::{self, output, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(error) = cli::dispatch(cli).await {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}
