use clap::Parser;
use ecad_api::cli::{run, Cli};
use ecad_api::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
